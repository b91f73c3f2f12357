//! In-Memory Repository Implementation
//!
//! Process-local store used by tests and by `STORAGE=memory` runs.
//! Data is lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::domain::value_object::{UserId, email::Email};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    credentials: HashMap<UserId, Credential>,
    /// Normalized email -> owner, doubles as the unique index
    emails: HashMap<String, UserId>,
}

#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop an account and its credential; returns whether it existed
    pub async fn remove(&self, user_id: &UserId) -> bool {
        let mut tables = self.tables.write().await;
        let Some(user) = tables.users.remove(user_id) else {
            return false;
        };
        tables.credentials.remove(user_id);
        tables.emails.remove(user.email.as_str());
        true
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create(&self, user: &User, credential: &Credential) -> AuthResult<()> {
        let mut tables = self.tables.write().await;

        if tables.emails.contains_key(user.email.as_str()) {
            return Err(AuthError::EmailInUse);
        }

        tables
            .emails
            .insert(user.email.as_str().to_string(), user.user_id);
        tables.users.insert(user.user_id, user.clone());
        tables.credentials.insert(user.user_id, credential.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.tables.read().await.users.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .emails
            .get(email.as_str())
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.tables.read().await.emails.contains_key(email.as_str()))
    }
}

impl CredentialRepository for InMemoryAuthRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
        Ok(self.tables.read().await.credentials.get(user_id).cloned())
    }
}
