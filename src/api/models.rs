use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::core::errors::{FieldError, UserError};

const EMAIL_INDEX_MARKER: &str = "email dup key";

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StandardError {
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: NaiveDateTime,
    pub status: u16,
    pub error: String,
    pub error_message: String,
    pub path: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: NaiveDateTime,
    pub status: u16,
    pub error: String,
    pub error_message: String,
    pub path: String,
    pub errors: Vec<FieldError>,
}

// Carries the request path so the body can echo it back.
#[derive(Debug)]
pub struct ApiError {
    pub error: UserError,
    pub path: String,
}

impl ApiError {
    pub fn new(error: UserError, path: &str) -> Self {
        ApiError {
            error,
            path: path.to_string(),
        }
    }
}

fn duplicate_key_message(message: &str) -> &'static str {
    if message.contains(EMAIL_INDEX_MARKER) {
        "Email already registered"
    } else {
        "Dup key exception!"
    }
}

fn standard_error(status: StatusCode, error_message: String, path: String) -> axum::response::Response {
    let body = StandardError {
        timestamp: Local::now().naive_local(),
        status: status.as_u16(),
        error: status.canonical_reason().unwrap_or_default().to_string(),
        error_message,
        path,
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self.error {
            UserError::DuplicateKey(message) => {
                warn!(path = %self.path, %message, "duplicate key");
                standard_error(
                    StatusCode::BAD_REQUEST,
                    duplicate_key_message(&message).to_string(),
                    self.path,
                )
            }
            UserError::Validation(errors) => {
                warn!(path = %self.path, violations = errors.len(), "request validation failed");
                let body = ValidationError {
                    timestamp: Local::now().naive_local(),
                    status: StatusCode::BAD_REQUEST.as_u16(),
                    error: "Validation Error".to_string(),
                    error_message: "Error on attributes validation".to_string(),
                    path: self.path,
                    errors,
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            UserError::NotFound(message) => {
                warn!(path = %self.path, %message, "object not found");
                standard_error(StatusCode::NOT_FOUND, message, self.path)
            }
            other => {
                error!(path = %self.path, error = %other, "unhandled error");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
