//! Book Error Types
//!
//! Listing-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::upload::UploadError;
use thiserror::Error;

/// Book-specific result type alias
pub type BookResult<T> = Result<T, BookError>;

/// Book-specific error variants
///
/// Client-side variants display exactly the message sent to the client.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("Title, Author, and Condition are required")]
    MissingFields,

    #[error("Invalid condition value. Allowed: Like New, Good, Fair")]
    InvalidCondition,

    #[error("{field} must be at most {max} characters")]
    TextTooLong { field: &'static str, max: usize },

    #[error("Message and status are required")]
    ReviewFieldsRequired,

    #[error("Invalid status value. Allowed: accepted, declined")]
    InvalidStatus,

    /// Accepted and declined are terminal
    #[error("Book has already been reviewed")]
    AlreadyReviewed,

    #[error("Book not found")]
    NotFound,

    /// Absent and foreign listings are indistinguishable on mutation
    #[error("Not allowed. Book not found or not owned by you.")]
    NotOwner,

    #[error("Only images allowed")]
    NotAnImage,

    #[error("Image must be at most {}", display_size(.max_bytes))]
    ImageTooLarge { max_bytes: usize },

    #[error("Invalid request body")]
    InvalidBody,

    /// Image file could not be written
    #[error("Image storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BookError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::MissingFields
            | BookError::InvalidCondition
            | BookError::TextTooLong { .. }
            | BookError::ReviewFieldsRequired
            | BookError::InvalidStatus
            | BookError::AlreadyReviewed
            | BookError::NotAnImage
            | BookError::ImageTooLarge { .. }
            | BookError::InvalidBody => ErrorKind::BadRequest,
            BookError::NotFound => ErrorKind::NotFound,
            BookError::NotOwner => ErrorKind::Forbidden,
            BookError::Storage(_) | BookError::Database(_) | BookError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BookError::Database(e) => {
                tracing::error!(error = %e, "Book database error");
            }
            BookError::Storage(e) => {
                tracing::error!(error = %e, "Book image storage error");
            }
            BookError::Internal(msg) => {
                tracing::error!(message = %msg, "Book internal error");
            }
            BookError::NotOwner => {
                tracing::warn!("Rejected mutation of a listing not owned by caller");
            }
            _ => {
                tracing::debug!(error = %self, "Book error");
            }
        }
    }
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<UploadError> for BookError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::NotAnImage => BookError::NotAnImage,
            UploadError::TooLarge { max_bytes } => BookError::ImageTooLarge { max_bytes },
            UploadError::Io(e) => BookError::Storage(e),
        }
    }
}

/// Whole mebibytes render as `N MB`, anything else in bytes
fn display_size(bytes: &usize) -> String {
    const MIB: usize = 1024 * 1024;
    if *bytes >= MIB && bytes % MIB == 0 {
        format!("{} MB", bytes / MIB)
    } else {
        format!("{bytes} bytes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_too_large_message() {
        let err = BookError::ImageTooLarge {
            max_bytes: 5 * 1024 * 1024,
        };
        assert_eq!(err.to_string(), "Image must be at most 5 MB");

        let err = BookError::ImageTooLarge { max_bytes: 1000 };
        assert_eq!(err.to_string(), "Image must be at most 1000 bytes");
    }

    #[test]
    fn test_upload_error_mapping() {
        assert!(matches!(
            BookError::from(UploadError::NotAnImage),
            BookError::NotAnImage
        ));
        assert!(matches!(
            BookError::from(UploadError::TooLarge { max_bytes: 10 }),
            BookError::ImageTooLarge { max_bytes: 10 }
        ));

        let io = std::io::Error::other("disk full");
        let err = BookError::from(UploadError::Io(io));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
