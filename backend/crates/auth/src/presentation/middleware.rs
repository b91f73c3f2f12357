//! Auth Middleware
//!
//! `require_auth` resolves the bearer token to a [`CurrentUser`] and stores
//! it in request extensions. The role gates read it back; they must be
//! layered inside `require_auth`.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::{HeaderMap, header, request::Parts};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::AuthenticateUseCase;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, user_role::UserRole};
use crate::error::AuthError;

/// Middleware state, obtained from [`AuthAppState::guard`](crate::AuthAppState::guard)
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

/// The authenticated user for this request
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub fn id(&self) -> UserId {
        self.0.user_id
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }

    pub fn user(&self) -> &User {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AuthError::TokenMissing)
    }
}

/// Middleware that requires a valid bearer token
pub async fn require_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = bearer_token(req.headers()).ok_or(AuthError::TokenMissing)?;

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.tokens.clone());
    let user = use_case.execute(&token).await?;

    tracing::debug!(user_id = %user.user_id, role = %user.role, "Authenticated request");

    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}

/// Gate: `Student` only
pub async fn require_student(req: Request, next: Next) -> Result<Response, AuthError> {
    require_role(UserRole::Student, req, next).await
}

/// Gate: `Teacher` only
pub async fn require_teacher(req: Request, next: Next) -> Result<Response, AuthError> {
    require_role(UserRole::Teacher, req, next).await
}

async fn require_role(required: UserRole, req: Request, next: Next) -> Result<Response, AuthError> {
    let current = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AuthError::TokenMissing)?;

    if !current.user().has_role(required) {
        return Err(AuthError::RoleMismatch { required });
    }

    Ok(next.run(req).await)
}

/// `Authorization: Bearer <token>`; scheme is case-insensitive
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then(|| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def".into()));
        assert_eq!(bearer_token(&headers("bearer  abc")), Some("abc".into()));
        assert_eq!(bearer_token(&headers("Basic abc")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("Bearer")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
