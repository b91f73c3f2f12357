//! Sign In Use Case
//!
//! Email + password login. Unknown email and wrong password produce the same
//! error so the endpoint cannot be used to probe for accounts.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::hashing::verify_password;
use crate::application::sign_up::present;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
#[derive(Debug, Default)]
pub struct SignInInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Sign in output
pub struct SignInOutput {
    pub user: User,
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U, C> SignInUseCase<U, C>
where
    U: UserRepository,
    C: CredentialRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        credential_repo: Arc<C>,
        tokens: Arc<TokenService>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            credential_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let (Some(email), Some(password)) = (present(input.email), present(input.password))
        else {
            return Err(AuthError::MissingFields);
        };

        // A malformed email or password can never match a stored account
        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password = RawPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let credential = self
            .credential_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or_else(|| {
                AuthError::Internal(format!("Credential missing for user {}", user.user_id))
            })?;

        let verified = verify_password(
            credential.password_hash,
            raw_password,
            self.config.password_pepper.clone(),
        )
        .await?;

        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(SignInOutput { user, token })
    }
}
