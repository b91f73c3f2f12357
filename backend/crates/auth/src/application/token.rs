//! Bearer Token Service
//!
//! Issues and verifies the signed tokens handed out at signup/login.
//! Claims: `{ id, role, iat, exp }`, with `exp = iat + token_ttl`.

use chrono::Utc;
use platform::token::{TokenCodec, TokenError};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::value_object::{UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Signed token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: UserId,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct TokenService {
    codec: TokenCodec,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            codec: TokenCodec::hs256(&config.token_secret),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Sign a token for `user`
    pub fn issue(&self, user: &User) -> AuthResult<String> {
        let iat = Utc::now().timestamp();
        let claims = TokenClaims {
            id: user.user_id,
            role: user.role,
            iat,
            exp: iat + self.ttl_secs,
        };

        self.codec
            .encode(&claims)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Check signature and expiry
    pub fn verify(&self, token: &str) -> AuthResult<TokenClaims> {
        self.codec.decode(token).map_err(|e| {
            match &e {
                TokenError::Expired => tracing::debug!("Expired bearer token"),
                other => tracing::debug!(error = %other, "Unverifiable bearer token"),
            }
            AuthError::TokenInvalid
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{email::Email, user_name::UserName};
    use std::time::Duration;

    fn teacher() -> User {
        User::new(
            UserName::new("Tina").unwrap(),
            Email::new("tina@school.edu").unwrap(),
            UserRole::Teacher,
        )
    }

    #[test]
    fn test_issue_and_verify() {
        let service = TokenService::new(&AuthConfig::with_random_secret());
        let user = teacher();

        let token = service.issue(&user).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.id, user.user_id);
        assert_eq!(claims.role, UserRole::Teacher);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_other_secret_rejected() {
        let issuer = TokenService::new(&AuthConfig::with_random_secret());
        let verifier = TokenService::new(&AuthConfig::with_random_secret());

        let token = issuer.issue(&teacher()).unwrap();
        assert!(matches!(verifier.verify(&token), Err(AuthError::TokenInvalid)));
    }

    #[test]
    fn test_expired_rejected() {
        let config = AuthConfig {
            token_ttl: Duration::ZERO,
            ..AuthConfig::with_random_secret()
        };
        let service = TokenService::new(&config);
        let token = service.issue(&teacher()).unwrap();

        std::thread::sleep(Duration::from_millis(1100));
        assert!(matches!(service.verify(&token), Err(AuthError::TokenInvalid)));
    }

    #[test]
    fn test_garbage_rejected() {
        let service = TokenService::new(&AuthConfig::with_random_secret());
        assert!(matches!(service.verify("abc"), Err(AuthError::TokenInvalid)));
    }
}
