//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use authon_sdk::User;

/// Create a test user with sensible defaults.
pub fn create_test_user(overrides: impl FnOnce(&mut User)) -> User {
    let mut user: User = serde_json::from_value(serde_json::json!({
        "id": "user_test_1",
        "email": "ada@example.com",
        "emailVerified": true,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "banned": false,
        "createdAt": "2024-01-15T10:30:00Z",
        "updatedAt": "2024-01-15T10:30:00Z"
    }))
    .expect("test user fixture is valid");
    overrides(&mut user);
    user
}

/// JSON body the Authon API would return for `user`.
pub fn user_json(user: &User) -> serde_json::Value {
    serde_json::to_value(user).expect("users serialize")
}
