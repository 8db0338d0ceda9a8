//! JSON error bodies
//!
//! Every failure ends in `{success: false, error: <status>, message: <text>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use trivia_core::errors::{ExError, ExErrorKind};

/// An error response; the status decides the fixed message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
}

impl ApiError {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
        }
    }

    pub fn unprocessable() -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn method_not_allowed() -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        match self.status {
            StatusCode::NOT_FOUND => "resource not found",
            StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
            StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
            _ => "Internal Server Error",
        }
    }
}

impl From<ExError> for ApiError {
    fn from(err: ExError) -> Self {
        match err.kind() {
            ExErrorKind::NotFound => Self::not_found(),
            ExErrorKind::Unprocessable | ExErrorKind::InvalidInput | ExErrorKind::MissingField => {
                Self::unprocessable()
            }
            _ => {
                tracing::error!(error = %err, "request failed");
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "success": false,
            "error": self.status.as_u16(),
            "message": self.message(),
        });

        (self.status, Json(body)).into_response()
    }
}
