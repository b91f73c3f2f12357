//! Credential Entity
//!
//! Sensitive half of an account, kept apart from [`User`](super::user::User)
//! so profile reads never carry the hash.

use crate::domain::value_object::{UserId, user_password::UserPassword};

#[derive(Debug, Clone)]
pub struct Credential {
    pub user_id: UserId,
    pub password_hash: UserPassword,
}

impl Credential {
    pub fn new(user_id: UserId, password_hash: UserPassword) -> Self {
        Self {
            user_id,
            password_hash,
        }
    }
}
