use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::error::ArmoryError;
use crate::models::ErrorBody;

pub const LOADOUT_NOT_FOUND: &str = "Loadout not found";
pub const DUPLICATE_NAME: &str = "Loadout with this name already exists.";
pub const CREATE_FAILED: &str = "Failed to save the loadout to the database.";
pub const UPDATE_FAILED: &str = "Failed to update the loadout.";

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }

    /// Map a failed write, replacing the message of unclassified failures
    /// with a fixed one so store internals stay out of the response.
    pub fn from_write(e: ArmoryError, fallback: &str) -> Self {
        match e {
            ArmoryError::NotFound(_) | ArmoryError::DuplicateName(_) => e.into(),
            other => {
                tracing::error!(error = %other, "loadout write failed");
                AppError::internal(fallback)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<ArmoryError> for AppError {
    fn from(e: ArmoryError) -> Self {
        match &e {
            ArmoryError::NotFound(_) => AppError::not_found(LOADOUT_NOT_FOUND),
            ArmoryError::DuplicateName(_) => AppError::conflict(DUPLICATE_NAME),
            _ => AppError::internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}
