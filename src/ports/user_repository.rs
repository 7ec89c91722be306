//! Persistence port for user accounts.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::user::{UserAccount, Username};

/// Port for reading and writing user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds an account by username.
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<UserAccount>, DomainError>;

    /// Checks whether a username is already registered.
    async fn exists(&self, username: &Username) -> Result<bool, DomainError>;

    /// Inserts a new account.
    async fn create(&self, account: &UserAccount) -> Result<(), DomainError>;
}
