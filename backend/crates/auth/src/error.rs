//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. The `Display` text of every client-side
//! variant is exactly what the HTTP body's `message` carries.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::user_role::UserRole;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Signup/login body is missing a required field
    #[error("All fields are required")]
    MissingFields,

    /// A field was present but failed validation
    #[error("{0}")]
    Validation(String),

    /// Body was not parseable JSON of the expected shape
    #[error("Invalid request body")]
    InvalidBody,

    /// Email is already registered
    #[error("Email already in use")]
    EmailInUse,

    /// Unknown email or wrong password (deliberately indistinguishable)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Teacher self-registration is switched off
    #[error("Teacher accounts cannot be self-registered")]
    TeacherSignupDisabled,

    /// No bearer token on a protected route
    #[error("Access token required")]
    TokenMissing,

    /// Token malformed, tampered or expired
    #[error("Invalid or expired token")]
    TokenInvalid,

    /// Token valid but the account no longer exists
    #[error("User not found")]
    UserNotFound,

    /// Authenticated with the wrong role for this route
    #[error("Access denied. {required} role required.")]
    RoleMismatch { required: UserRole },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields
            | AuthError::Validation(_)
            | AuthError::InvalidBody
            | AuthError::EmailInUse
            | AuthError::InvalidCredentials => ErrorKind::BadRequest,
            AuthError::TokenMissing => ErrorKind::Unauthorized,
            AuthError::TeacherSignupDisabled
            | AuthError::TokenInvalid
            | AuthError::UserNotFound
            | AuthError::RoleMismatch { .. } => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenInvalid | AuthError::UserNotFound => {
                tracing::warn!(error = %self, "Rejected bearer token");
            }
            AuthError::RoleMismatch { required } => {
                tracing::warn!(required = %required, "Role gate denied request");
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
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::EmailInUse.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::InvalidCredentials.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::TokenMissing.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::TokenInvalid.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::UserNotFound.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_role_messages() {
        let err = AuthError::RoleMismatch {
            required: UserRole::Student,
        };
        assert_eq!(err.to_string(), "Access denied. Student role required.");

        let err = AuthError::RoleMismatch {
            required: UserRole::Teacher,
        };
        assert_eq!(err.to_string(), "Access denied. Teacher role required.");
    }

    #[test]
    fn test_from_app_error() {
        let err: AuthError = AppError::bad_request("Invalid email format").into();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "Invalid email format"));

        let err: AuthError = AppError::internal("pool gone").into();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_internal_error_is_not_leaked() {
        let app = AuthError::Internal("secret detail".into()).to_app_error();
        assert_eq!(app.public_message(), "Server error");
    }
}
