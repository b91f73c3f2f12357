//! Error conversions - integration with external crates
//!
//! Database error classification when the `sqlx` feature is on, and the
//! HTTP rendering of [`AppError`](super::app_error::AppError) when the `axum` feature is on.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// PostgreSQL unique_violation
#[cfg(feature = "sqlx")]
pub const PG_UNIQUE_VIOLATION: &str = "23505";

/// Whether the error is a unique-constraint violation, optionally on a named constraint
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error, constraint: Option<&str>) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            let code_matches = db_err
                .code()
                .is_some_and(|code| code.as_ref() == PG_UNIQUE_VIOLATION);
            match constraint {
                Some(name) => code_matches && db_err.constraint() == Some(name),
                None => code_matches,
            }
        }
        _ => false,
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "success": false,
            "message": self.public_message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound, None));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut, Some("users_email_key")));
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_response_body_shape() {
        use axum::response::IntoResponse;

        let response = AppError::forbidden("Access denied. Teacher role required.").into_response();
        assert_eq!(response.status().as_u16(), 403);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Access denied. Teacher role required.");
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_server_error_body_is_generic() {
        use axum::response::IntoResponse;

        let response = AppError::internal("pool closed").into_response();
        assert_eq!(response.status().as_u16(), 500);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Server error");
    }
}
