use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections raised by the availability engine.
///
/// These are user-actionable outcomes, not system failures, and all map to
/// 400 Bad Request.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Malformed input such as a missing date, an inverted date range, or an extra
    /// service from another hotel.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Name of the offending request field
        field: String,
        /// Human readable reason
        message: String,
    },

    /// The requested range overlaps an existing active reservation, or a uniqueness
    /// rule such as the room number within a hotel was violated.
    #[error("{0}")]
    Conflict(String),

    /// The reservation is not in the state the operation requires.
    #[error("{0}")]
    InvalidState(String),
}

impl BookingError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let body = match self {
            Self::Validation { field, message } => ErrorDto {
                error: message,
                field: Some(field),
            },
            Self::Conflict(msg) | Self::InvalidState(msg) => ErrorDto::new(msg),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
