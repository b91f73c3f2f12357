//! Sign Up Use Case
//!
//! Registers an account and returns a token so the client is logged in
//! straight away.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::hashing::hash_password;
use crate::application::token::TokenService;
use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::RawPassword, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Sign up input (fields as received; `None` means absent)
#[derive(Debug, Default)]
pub struct SignUpInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Sign up output
pub struct SignUpOutput {
    pub user: User,
    pub token: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let (Some(name), Some(email), Some(password)) = (
            present(input.name),
            present(input.email),
            present(input.password),
        ) else {
            return Err(AuthError::MissingFields);
        };

        let name = UserName::new(name)?;
        let email = Email::new(email)?;

        let role = UserRole::from_requested(input.role.as_deref());
        if role.is_teacher() && !self.config.allow_teacher_signup {
            return Err(AuthError::TeacherSignupDisabled);
        }

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailInUse);
        }

        let raw_password = RawPassword::new(password)?;
        let password_hash =
            hash_password(raw_password, self.config.password_pepper.clone()).await?;

        let user = User::new(name, email, role);
        let credential = Credential::new(user.user_id, password_hash);

        // Unique constraint still guards against a concurrent signup
        self.user_repo.create(&user, &credential).await?;

        let token = self.tokens.issue(&user)?;

        tracing::info!(
            user_id = %user.user_id,
            role = %user.role,
            "User signed up"
        );

        Ok(SignUpOutput { user, token })
    }
}

/// Empty strings count as missing
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
