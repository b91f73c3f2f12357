//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use platform::config::{ConfigError, env_flag, optional_env};
use platform::crypto::random_bytes;

/// Environment variable holding the token signing secret
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for bearer tokens
    pub token_secret: Vec<u8>,
    /// Token lifetime (24 hours)
    pub token_ttl: Duration,
    /// Whether `role: "Teacher"` is honoured at signup
    pub allow_teacher_signup: bool,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: vec![0u8; 32],
            token_ttl: Duration::from_secs(24 * 3600),
            allow_teacher_signup: true,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing secret (for development and tests)
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: random_bytes(32),
            ..Default::default()
        }
    }

    /// Load from environment
    ///
    /// `JWT_SECRET` is mandatory in release builds. Debug builds fall back to
    /// a random per-process secret, which invalidates tokens on restart.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match optional_env(JWT_SECRET_ENV) {
            Some(secret) => Self {
                token_secret: secret.into_bytes(),
                ..Default::default()
            },
            None if cfg!(debug_assertions) => {
                tracing::warn!("{JWT_SECRET_ENV} not set, using a random signing secret");
                Self::with_random_secret()
            }
            None => return Err(ConfigError::Missing(JWT_SECRET_ENV.to_string())),
        };

        Ok(Self {
            allow_teacher_signup: env_flag("ALLOW_TEACHER_SIGNUP", true)?,
            password_pepper: optional_env("PASSWORD_PEPPER").map(String::into_bytes),
            ..base
        })
    }

    /// Token lifetime in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("allow_teacher_signup", &self.allow_teacher_signup)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl_secs(), 86_400);
        assert!(config.allow_teacher_signup);
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_random_secrets_differ() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_eq!(a.token_secret.len(), 32);
        assert_ne!(a.token_secret, b.token_secret);
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = AuthConfig {
            token_secret: vec![42u8; 4],
            password_pepper: Some(vec![42u8; 4]),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("42"));
    }
}
