//! User management endpoints (`/v1/users*`).

use authon_types::{
    BanUserParams, CreateUserParams, ListOptions, ListResult, UpdateUserParams, User,
};
use reqwest::Method;

use crate::client::AuthonBackend;
use crate::error::AuthonError;
use crate::transport::json_body;

/// User management operations, borrowed from an [`AuthonBackend`].
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    backend: &'a AuthonBackend,
}

impl<'a> Users<'a> {
    pub(crate) fn new(backend: &'a AuthonBackend) -> Self {
        Self { backend }
    }

    /// List users. `None` requests the default page.
    pub async fn list(&self, options: Option<ListOptions>) -> Result<ListResult<User>, AuthonError> {
        let mut url = self.backend.endpoint(&["v1", "users"]);
        if let Some(options) = options {
            url.query_pairs_mut()
                .append_pair("page", &options.page.to_string())
                .append_pair("perPage", &options.per_page.to_string());
        }

        let request = self.backend.secret_request(Method::GET, url, None);
        self.backend.send(request).await
    }

    pub async fn get(&self, user_id: &str) -> Result<User, AuthonError> {
        let url = self.backend.endpoint(&["v1", "users", user_id]);
        let request = self.backend.secret_request(Method::GET, url, None);
        self.backend.send(request).await
    }

    pub async fn create(&self, params: &CreateUserParams) -> Result<User, AuthonError> {
        let body = json_body(params)?;
        let url = self.backend.endpoint(&["v1", "users"]);
        let request = self.backend.secret_request(Method::POST, url, Some(body));
        self.backend.send(request).await
    }

    /// Patch a user. Only the fields set in `params` change.
    pub async fn update(
        &self,
        user_id: &str,
        params: &UpdateUserParams,
    ) -> Result<User, AuthonError> {
        let body = json_body(params)?;
        let url = self.backend.endpoint(&["v1", "users", user_id]);
        let request = self.backend.secret_request(Method::PATCH, url, Some(body));
        self.backend.send(request).await
    }

    pub async fn delete(&self, user_id: &str) -> Result<(), AuthonError> {
        let url = self.backend.endpoint(&["v1", "users", user_id]);
        let request = self.backend.secret_request(Method::DELETE, url, None);
        self.backend.send_empty(request).await
    }

    pub async fn ban(&self, user_id: &str) -> Result<User, AuthonError> {
        let url = self.backend.endpoint(&["v1", "users", user_id, "ban"]);
        let request = self.backend.secret_request(Method::POST, url, None);
        self.backend.send(request).await
    }

    /// Ban a user, recording a reason on the Authon side.
    pub async fn ban_with_reason(
        &self,
        user_id: &str,
        params: &BanUserParams,
    ) -> Result<User, AuthonError> {
        let body = json_body(params)?;
        let url = self.backend.endpoint(&["v1", "users", user_id, "ban"]);
        let request = self.backend.secret_request(Method::POST, url, Some(body));
        self.backend.send(request).await
    }

    pub async fn unban(&self, user_id: &str) -> Result<User, AuthonError> {
        let url = self.backend.endpoint(&["v1", "users", user_id, "unban"]);
        let request = self.backend.secret_request(Method::POST, url, None);
        self.backend.send(request).await
    }
}
