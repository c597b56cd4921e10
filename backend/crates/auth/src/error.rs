//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` taxonomy. Business rejections render as a
//! 200 response with `success: false` and a specific message; server
//! faults render as a 500 with a generic message and full detail in the
//! logs only.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required request field is missing or blank
    #[error("Please enter all fields")]
    MissingFields,

    /// Malformed input (bad email format, oversized password, ...)
    #[error("{0}")]
    InvalidInput(String),

    /// Registration against an email that already has an account
    #[error("User already exists.")]
    AlreadyExists,

    /// Login against an unknown email
    #[error("User does not exist.")]
    UnknownEmail,

    /// Password change against an unknown account id
    #[error("User not found")]
    AccountNotFound,

    /// Account is inside the lockout window; password never compared
    #[error(
        "Too many failed attempts. Your account is locked. Please try again in {minutes_left} minute(s)."
    )]
    AccountLocked { minutes_left: i64 },

    /// Wrong password on login; the counter was already incremented
    #[error("Password doesn't match. You have {attempts_left} attempt(s) left.")]
    WrongPassword { attempts_left: u32 },

    /// Wrong old password on the change-password path
    #[error("Old password is incorrect")]
    OldPasswordMismatch,

    /// Business-rule rejection raised by a shared component
    #[error("{0}")]
    Rejected(String),

    /// New password below the minimum length
    #[error("New password must be at least 8 characters long")]
    PasswordTooShort,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Hashing failure (resource exhaustion); fatal for the request
    #[error("Password hashing failed: {0}")]
    Hashing(#[from] platform::password::PasswordHashError),

    /// Token signing failure
    #[error("Token signing failed: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Classify onto the unified taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields
            | AuthError::InvalidInput(_)
            | AuthError::PasswordTooShort => ErrorKind::Validation,
            AuthError::AlreadyExists
            | AuthError::UnknownEmail
            | AuthError::AccountNotFound
            | AuthError::AccountLocked { .. }
            | AuthError::WrongPassword { .. }
            | AuthError::OldPasswordMismatch
            | AuthError::Rejected(_) => ErrorKind::Domain,
            AuthError::Database(_)
            | AuthError::Hashing(_)
            | AuthError::TokenSigning(_)
            | AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Message rendered to the client
    ///
    /// Internal faults are reported generically; the specific cause
    /// goes to the logs only.
    fn client_message(&self) -> String {
        if self.kind().is_internal() {
            "Server Error".to_string()
        } else {
            self.to_string()
        }
    }

    /// Convert to the unified application error
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.client_message())
    }

    /// Log the error with the appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Hashing(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            AuthError::TokenSigning(e) => {
                tracing::error!(error = %e, "Token signing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::WrongPassword { attempts_left } => {
                tracing::warn!(attempts_left, "Failed login attempt");
            }
            AuthError::AccountLocked { minutes_left } => {
                tracing::warn!(minutes_left, "Login attempt on locked account");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();

        // Login failures additionally carry the attempt bookkeeping the
        // client renders: attemptsLeft and timeLeft (minutes, or null).
        match &self {
            AuthError::AccountLocked { minutes_left } => {
                let status = StatusCode::from_u16(self.kind().status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let body = serde_json::json!({
                    "success": false,
                    "message": self.client_message(),
                    "attemptsLeft": 0,
                    "timeLeft": minutes_left,
                });
                (status, Json(body)).into_response()
            }
            AuthError::WrongPassword { attempts_left } => {
                let status = StatusCode::from_u16(self.kind().status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let body = serde_json::json!({
                    "success": false,
                    "message": self.client_message(),
                    "attemptsLeft": attempts_left,
                    "timeLeft": serde_json::Value::Null,
                });
                (status, Json(body)).into_response()
            }
            _ => self.to_app_error().into_response(),
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::Validation => AuthError::InvalidInput(err.message().to_string()),
            ErrorKind::Domain => AuthError::Rejected(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}
