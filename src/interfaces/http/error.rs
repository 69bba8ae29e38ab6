//! Error envelopes for the HTTP layer.
//!
//! Every failure becomes a JSON body of the form
//! `{"error": "...", "message": "..."}`, where `message` is omitted when there
//! is nothing more to say.
//!
//! | Error | HTTP Status | `error` |
//! |-------|-------------|---------|
//! | Validation | 400 | The receipt is invalid |
//! | InvalidId | 400 | Invalid id format |
//! | NotFound | 404 | No receipt found for that id |
//! | malformed body, panic | 500 | Internal Server Error |

use crate::error::ReceiptError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::any::Any;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}

/// An [`ApiError`] paired with the status it is sent with.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: ApiError,
}

impl ApiErrorResponse {
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!(%message, "Request failed");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::with_message("Internal Server Error", message),
        )
    }
}

impl From<ReceiptError> for ApiErrorResponse {
    fn from(error: ReceiptError) -> Self {
        match error {
            ReceiptError::Validation(error) => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_message("The receipt is invalid", error.message()),
            ),
            ReceiptError::InvalidId(_) => {
                Self::new(StatusCode::BAD_REQUEST, ApiError::new("Invalid id format"))
            }
            ReceiptError::NotFound(_) => Self::new(
                StatusCode::NOT_FOUND,
                ApiError::new("No receipt found for that id"),
            ),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// Turns a handler panic into the same 500 envelope as any other failure.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(text) = panic.downcast_ref::<String>() {
        text.clone()
    } else if let Some(text) = panic.downcast_ref::<&str>() {
        (*text).to_string()
    } else {
        "Unknown panic".to_string()
    };
    ApiErrorResponse::internal(message).into_response()
}
