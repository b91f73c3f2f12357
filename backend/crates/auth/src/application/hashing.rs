//! Argon2 work on the blocking pool
//!
//! Hashing takes tens of milliseconds of CPU; running it inline would stall
//! every other request on the same worker thread.

use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

pub(crate) async fn hash_password(
    raw: RawPassword,
    pepper: Option<Vec<u8>>,
) -> AuthResult<UserPassword> {
    tokio::task::spawn_blocking(move || UserPassword::from_raw(&raw, pepper.as_deref()))
        .await
        .map_err(|e| AuthError::Internal(format!("Hashing task failed: {e}")))?
        .map_err(AuthError::from)
}

pub(crate) async fn verify_password(
    hash: UserPassword,
    raw: RawPassword,
    pepper: Option<Vec<u8>>,
) -> AuthResult<bool> {
    tokio::task::spawn_blocking(move || hash.verify(&raw, pepper.as_deref()))
        .await
        .map_err(|e| AuthError::Internal(format!("Verification task failed: {e}")))
}
