use authon_sdk::{AuthenticatedUser, BanUserParams, ListOptions, ListResult, User};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use serde::Deserialize;

use crate::{adapters::http::app_state::AppState, app_error::AppResult};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 20;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/{user_id}", get(get_user))
        .route("/{user_id}/ban", post(ban_user))
        .route("/{user_id}/unban", post(unban_user))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    page: Option<u32>,
    per_page: Option<u32>,
}

impl ListQuery {
    /// `None` when the caller sent neither parameter, so Authon picks its default page.
    fn into_options(self) -> Option<ListOptions> {
        match (self.page, self.per_page) {
            (None, None) => None,
            (page, per_page) => Some(ListOptions::new(
                page.unwrap_or(DEFAULT_PAGE),
                per_page.unwrap_or(DEFAULT_PER_PAGE),
            )),
        }
    }
}

#[derive(Deserialize)]
struct BanQuery {
    reason: Option<String>,
}

async fn list_users(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ListResult<User>>> {
    let page = app_state.authon.users().list(query.into_options()).await?;
    Ok(Json(page))
}

async fn get_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<User>> {
    let user = app_state.authon.users().get(&user_id).await?;
    Ok(Json(user))
}

async fn ban_user(
    State(app_state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(user_id): Path<String>,
    Query(query): Query<BanQuery>,
) -> AppResult<Json<User>> {
    let users = app_state.authon.users();
    let user = match query.reason {
        Some(reason) => {
            users
                .ban_with_reason(&user_id, &BanUserParams { reason: Some(reason) })
                .await?
        }
        None => users.ban(&user_id).await?,
    };

    tracing::info!(actor = %actor.id, user_id = %user.id, "User banned");
    Ok(Json(user))
}

async fn unban_user(
    State(app_state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(user_id): Path<String>,
) -> AppResult<Json<User>> {
    let user = app_state.authon.users().unban(&user_id).await?;

    tracing::info!(actor = %actor.id, user_id = %user.id, "User unbanned");
    Ok(Json(user))
}
