//! User Password Value Object
//!
//! Domain wrappers over `platform::password` that translate policy and
//! hashing failures into user-facing `AppError`s.
//!
//! ## Usage
//! ```rust
//! use auth::models::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("pw123456".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, None).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use kernel::error::app_error::{AppError, AppResult, ResultExt};
use kernel::error::kind::ErrorKind;
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Password as typed by the user, zeroized on drop
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// NFKC-normalize and apply the password policy
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooLong { max, .. } => {
                AppError::bad_request(format!("Password must be at most {max} characters"))
            }
            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
            }
            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("Password contains invalid characters")
            }
        })?;

        Ok(Self(clear_text))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed)
// ============================================================================

/// Argon2id hash in PHC format, safe to persist
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password (CPU-heavy, run off the async runtime)
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        raw.0
            .hash(pepper)
            .map(Self)
            .map_app_err(ErrorKind::InternalServerError, "Password hashing failed")
    }

    /// Rehydrate a stored hash
    pub fn from_db(phc: impl Into<String>) -> AppResult<Self> {
        HashedPassword::from_phc_string(phc)
            .map(Self)
            .map_app_err(ErrorKind::InternalServerError, "Stored password hash is corrupt")
    }

    /// Constant-time verification (CPU-heavy, run off the async runtime)
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_phc_string()
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_messages() {
        let err = RawPassword::new("   ".to_string()).unwrap_err();
        assert_eq!(err.message(), "Password cannot be empty");

        let err = RawPassword::new("a".repeat(200)).unwrap_err();
        assert_eq!(err.message(), "Password must be at most 128 characters");
    }

    #[test]
    fn test_hash_verify_and_reload() {
        let raw = RawPassword::new("pw123456".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, Some(b"pepper")).unwrap();

        let reloaded = UserPassword::from_db(hashed.as_str()).unwrap();
        assert!(reloaded.verify(&raw, Some(b"pepper")));

        let wrong = RawPassword::new("pw654321".to_string()).unwrap();
        assert!(!reloaded.verify(&wrong, Some(b"pepper")));
    }

    #[test]
    fn test_corrupt_hash_is_server_error() {
        let err = UserPassword::from_db("plaintext").unwrap_err();
        assert!(err.is_server_error());
        assert_eq!(err.message(), "Stored password hash is corrupt");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_debug_is_redacted() {
        let raw = RawPassword::new("hunter2".to_string()).unwrap();
        assert!(!format!("{raw:?}").contains("hunter2"));
    }
}
