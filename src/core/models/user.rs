use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const USER_TYPE_NAME: &str = "User";

/// Persisted user document. An empty `id` means the store has not assigned one yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

// Fields are optional so the same body serves both create and partial update.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserRequest {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        UserRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}
