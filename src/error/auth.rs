use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is present in the session.
    ///
    /// The request reached a guarded endpoint without logging in first.
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// Usually means the user row was deleted while a session was still
    /// live. Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user's stored role string could not be parsed.
    ///
    /// Indicates a corrupted or hand-edited role column. Results in a 500
    /// Internal Server Error with a generic message returned to the client.
    #[error("User {user_id} has unrecognized role: {role}")]
    UnknownRole { user_id: i32, role: String },

    /// The authenticated user lacks a required permission.
    ///
    /// Results in a 403 Forbidden response; the denial reason is logged
    /// server-side only.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// The presented admin bootstrap code is missing, expired, or wrong.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid or expired admin bootstrap code")]
    InvalidBootstrapCode,
}

/// Converts authorization errors into HTTP responses.
///
/// Denial reasons and session inconsistencies are logged for diagnostics
/// while the client-facing messages stay generic to avoid information
/// leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You don't have permission to do that".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidBootstrapCode => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::UnknownRole { user_id, role } => {
                tracing::error!("User {} has unrecognized role '{}'", user_id, role);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
