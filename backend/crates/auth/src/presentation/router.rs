//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{require_auth, require_student, require_teacher};

/// Create the Auth router for any repository implementation
///
/// Mount under `/api/v1/auth`.
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let guard = state.guard();

    let gated = Router::new()
        .route(
            "/user-auth",
            get(handlers::user_auth).route_layer(middleware::from_fn(require_student)),
        )
        .route(
            "/admin-auth",
            get(handlers::admin_auth).route_layer(middleware::from_fn(require_teacher)),
        )
        .route_layer(middleware::from_fn_with_state(guard, require_auth::<R>));

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::login::<R>))
        .merge(gated)
        .with_state(state)
}
