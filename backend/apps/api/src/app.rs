//! Router composition
//!
//! Mounts the bounded-context routers under `/api/v1`, serves uploaded
//! images, and adds CORS plus request tracing around everything.

use auth::domain::repository::{CredentialRepository, UserRepository};
use auth::{AuthAppState, AuthConfig, auth_router};
use axum::http::{HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use books::domain::repository::ListingRepository;
use books::{BooksAppState, BooksConfig, books_router};
use kernel::error::app_error::AppError;
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the full application router over the given stores
pub fn build_router<U, L>(
    users: U,
    listings: L,
    auth_config: AuthConfig,
    books_config: BooksConfig,
    origins: Vec<HeaderValue>,
) -> Router
where
    U: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
    L: ListingRepository + Clone + Send + Sync + 'static,
{
    let auth_state = AuthAppState::new(users, auth_config);
    let guard = auth_state.guard();

    let uploads = ServeDir::new(books_config.upload_dir.clone());
    let uploads_prefix = books_config.public_prefix.clone();
    let books_state = BooksAppState::new(listings, books_config);

    Router::new()
        .route("/", get(health))
        .nest("/api/v1/auth", auth_router(auth_state))
        .nest("/api/v1/books", books_router(books_state, guard))
        .nest_service(&uploads_prefix, uploads)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors(origins))
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn not_found(uri: Uri) -> Response {
    if uri.path().starts_with("/api") {
        AppError::not_found("API endpoint not found").into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

fn cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::InMemoryAuthRepository;
    use axum::body::Body;
    use axum::http::Request;
    use books::InMemoryBookRepository;
    use tower::ServiceExt;

    fn app(upload_dir: &std::path::Path) -> Router {
        let books_config = BooksConfig {
            upload_dir: upload_dir.to_path_buf(),
            ..BooksConfig::default()
        };
        build_router(
            InMemoryAuthRepository::new(),
            InMemoryBookRepository::new(),
            AuthConfig::with_random_secret(),
            books_config,
            vec![HeaderValue::from_static("http://localhost:5173")],
        )
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get(app(dir.path()), "/").await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_unknown_api_path() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get(app(dir.path()), "/api/v1/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "API endpoint not found");
    }

    #[tokio::test]
    async fn test_serves_uploads() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cover.png"), b"png bytes").unwrap();

        let (status, body) = get(app(dir.path()), "/uploads/cover.png").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"png bytes");

        let (status, _) = get(app(dir.path()), "/uploads/missing.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_books_are_mounted_behind_auth() {
        let dir = tempfile::tempdir().unwrap();
        let (status, _) = get(app(dir.path()), "/api/v1/books/get-all-books").await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
