use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request was made without logging in or after the session expired.
    /// Results in a 401 Unauthorized response.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Happens when a user is deleted while one of their sessions is still alive.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// No user is registered with the email used to log in.
    #[error("No user registered with email {0}")]
    UnknownEmail(String),

    /// The user neither owns the resource nor holds the required privilege.
    ///
    /// Results in a 403 Forbidden response. The message is logged only.
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing or stale sessions and unknown login emails
/// - 403 Forbidden - For ownership and privilege failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::UnknownEmail(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Authentication required")),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("You do not have access to this resource")),
            )
                .into_response(),
        }
    }
}
