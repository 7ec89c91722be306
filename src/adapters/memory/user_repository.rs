//! In-memory user repository for tests and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::user::{UserAccount, Username};
use crate::ports::UserRepository;

/// In-memory implementation of [`UserRepository`].
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. Acceptable for test
/// and development use; production uses the Postgres adapter.
pub struct InMemoryUserRepository {
    accounts: RwLock<HashMap<Username, UserAccount>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserAccount>, DomainError> {
        Ok(self
            .accounts
            .read()
            .expect("accounts lock poisoned")
            .get(username)
            .cloned())
    }

    async fn exists(&self, username: &Username) -> Result<bool, DomainError> {
        Ok(self
            .accounts
            .read()
            .expect("accounts lock poisoned")
            .contains_key(username))
    }

    async fn create(&self, account: &UserAccount) -> Result<(), DomainError> {
        self.accounts
            .write()
            .expect("accounts lock poisoned")
            .insert(account.username.clone(), account.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::PasswordHash;

    fn account(name: &str) -> UserAccount {
        UserAccount::new(
            Username::new(name).unwrap(),
            PasswordHash::from_encoded("salt$digest"),
        )
    }

    #[tokio::test]
    async fn created_account_is_findable() {
        let repo = InMemoryUserRepository::new();
        repo.create(&account("alice")).await.unwrap();

        let found = repo
            .find_by_username(&Username::new("alice").unwrap())
            .await
            .unwrap();
        assert!(found.is_some());
        assert!(repo.exists(&Username::new("alice").unwrap()).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_username_does_not_exist() {
        let repo = InMemoryUserRepository::new();
        assert!(!repo.exists(&Username::new("ghost").unwrap()).await.unwrap());
    }
}
