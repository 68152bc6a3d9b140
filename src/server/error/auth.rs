use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The request requires a logged in user. Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is logged in but lacks the permission required for the operation.
    ///
    /// Carries the user id and a description for server-side logs. Results in a
    /// 403 Forbidden response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// E-mail and password did not match a stored account.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid e-mail or password")]
    InvalidCredentials,

    /// The account has an active suspension.
    ///
    /// Results in a 403 Forbidden response naming the suspension expiry.
    #[error("User {user_id} is suspended until {until}")]
    Suspended {
        user_id: i32,
        until: DateTime<Utc>,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `UserNotInSession` → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `AccessDenied` → 403 Forbidden
/// - `InvalidCredentials` → 401 Unauthorized
/// - `Suspended` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not logged in".to_string()),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found".to_string()),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to do that".to_string(),
            ),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid e-mail or password".to_string(),
            ),
            Self::Suspended { until, .. } => (
                StatusCode::FORBIDDEN,
                format!("Your account is suspended until {}", until.to_rfc3339()),
            ),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
