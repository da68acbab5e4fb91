use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Field name to messages, rendered as `{"field": ["message"]}`
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub const ACCOUNT_NOT_FOUND: &str = "No account with this phone number was found.";
pub const INVITE_CODE_NOT_FOUND: &str = "Invite code not found.";
pub const CREDENTIALS_NOT_PROVIDED: &str = "Authentication credentials were not provided.";
pub const USER_NOT_FOUND: &str = "User not found.";

/// Errors surfaced to API callers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed: {0:?}")]
    Validation(FieldErrors),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid verification code.")]
    InvalidCode,

    #[error("An invite code has already been activated for this account.")]
    AlreadyActivated,

    #[error("{0}")]
    Unauthorized(String),

    #[error("Token is invalid or expired")]
    TokenNotValid,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Single-field validation error
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.into()]);
        ApiError::Validation(errors)
    }

    pub fn account_not_found() -> Self {
        ApiError::NotFound(ACCOUNT_NOT_FOUND.to_string())
    }

    pub fn invite_code_not_found() -> Self {
        ApiError::NotFound(INVITE_CODE_NOT_FOUND.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, json!(errors)),
            ApiError::MalformedBody(detail) => {
                (StatusCode::BAD_REQUEST, json!({ "detail": detail }))
            }
            ApiError::NotFound(_) | ApiError::InvalidCode | ApiError::AlreadyActivated => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            ApiError::Unauthorized(detail) => {
                (StatusCode::UNAUTHORIZED, json!({ "detail": detail }))
            }
            ApiError::TokenNotValid => (
                StatusCode::UNAUTHORIZED,
                json!({ "detail": self.to_string(), "code": "token_not_valid" }),
            ),
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
