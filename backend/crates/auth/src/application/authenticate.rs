//! Authenticate Use Case
//!
//! Resolves a bearer token to the current user. The user row is re-read on
//! every call so a deleted account stops working immediately, and the role
//! comes from storage rather than from the token.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<User> {
        let claims = self.tokens.verify(token)?;

        self.user_repo
            .find_by_id(&claims.id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
