use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Metadata;

/// An Authon user record.
///
/// Returned by token verification and the user management endpoints.
/// Only the remote service mutates users; this is a read-only snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub email_verified: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default)]
    pub phone_verified: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub banned: bool,

    /// Free-form metadata set by the developer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// OAuth identities linked to this user
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_accounts: Vec<ExternalAccount>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// An OAuth-linked external account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalAccount {
    /// Provider name (e.g., "google", "github")
    pub provider: String,

    /// User ID on the provider side
    pub provider_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// An active login session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub status: String,
    pub last_active_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A page of results from a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult<T> {
    pub data: Vec<T>,

    #[serde(default)]
    pub total_count: u64,

    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub per_page: u32,
}

impl<T> ListResult<T> {
    /// Whether more pages follow this one.
    ///
    /// Always false for unpaginated results (`per_page == 0`).
    pub fn has_more(&self) -> bool {
        if self.per_page == 0 {
            return false;
        }
        u64::from(self.page) * u64::from(self.per_page) < self.total_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str = r#"{
        "id": "user_2x8kq",
        "email": "ada@example.com",
        "emailVerified": true,
        "phoneVerified": false,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "banned": false,
        "metadata": {"plan": "pro", "seats": 3},
        "externalAccounts": [
            {"provider": "github", "providerId": "1815", "email": "ada@example.com"}
        ],
        "createdAt": "2024-01-15T10:30:00Z",
        "updatedAt": "2024-01-20T14:00:00Z"
    }"#;

    #[test]
    fn test_user_deserializes_camel_case() {
        let user: User = serde_json::from_str(USER_JSON).unwrap();

        assert_eq!(user.id, "user_2x8kq");
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
        assert!(user.email_verified);
        assert!(!user.phone_verified);
        assert_eq!(user.phone, None);
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert_eq!(user.external_accounts.len(), 1);
        assert_eq!(user.external_accounts[0].provider_id, "1815");
        assert_eq!(
            user.metadata.as_ref().and_then(|m| m.get("plan")),
            Some(&serde_json::json!("pro"))
        );
        assert_eq!(user.created_at.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_user_serialization_omits_empty_fields() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let value = serde_json::to_value(&user).unwrap();
        let obj = value.as_object().unwrap();

        assert!(!obj.contains_key("email"));
        assert!(!obj.contains_key("externalAccounts"));
        assert!(!obj.contains_key("metadata"));
        assert_eq!(obj["banned"], serde_json::json!(false));
    }

    #[test]
    fn test_user_requires_timestamps() {
        let result = serde_json::from_str::<User>(r#"{"id":"u1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_result_deserializes() {
        let json = format!(
            r#"{{"data":[{}],"totalCount":41,"page":2,"perPage":20}}"#,
            USER_JSON
        );
        let page: ListResult<User> = serde_json::from_str(&json).unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total_count, 41);
        assert_eq!(page.page, 2);
        assert_eq!(page.per_page, 20);
        assert!(page.has_more());
    }

    #[test]
    fn test_list_result_last_page() {
        let page: ListResult<ExternalAccount> =
            serde_json::from_str(r#"{"data":[],"totalCount":40,"page":2,"perPage":20}"#).unwrap();
        assert!(!page.has_more());

        let unpaginated: ListResult<ExternalAccount> =
            serde_json::from_str(r#"{"data":[],"totalCount":40}"#).unwrap();
        assert!(!unpaginated.has_more());
    }

    #[test]
    fn test_session_deserializes() {
        let session: Session = serde_json::from_str(
            r#"{
                "id": "sess_1",
                "userId": "user_1",
                "status": "active",
                "lastActiveAt": "2024-01-20T14:00:00Z",
                "expireAt": "2024-02-20T14:00:00Z",
                "createdAt": "2024-01-20T13:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(session.user_id, "user_1");
        assert_eq!(session.status, "active");
        assert!(session.expire_at > session.last_active_at);
    }
}
