use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// A single violated constraint on a request field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field_name: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field_name: &str, message: impl Into<String>) -> Self {
        FieldError {
            field_name: field_name.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum UserError {
    /// The store rejected a write because of a unique index
    #[error("{0}")]
    DuplicateKey(String),

    /// One or more request fields failed validation
    #[error("Error on attributes validation")]
    Validation(Vec<FieldError>),

    /// No entity matched the given id
    #[error("{0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl UserError {
    pub fn not_found(id: &str, type_name: &str) -> Self {
        UserError::NotFound(format!("Object not found. ID: {}, Type {}", id, type_name))
    }
}
