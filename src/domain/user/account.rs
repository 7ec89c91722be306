//! User account entity and credential value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Validated username.
///
/// Usernames identify users throughout the system (library entries and
/// reviews are keyed by username, matching the legacy data model).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    const MAX_LEN: usize = 50;

    /// Creates a Username, rejecting blank or overlong input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(ValidationError::too_long("username", Self::MAX_LEN));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque password hash produced by a `PasswordHasher` adapter.
///
/// Never compared with `==` in application code; verification goes through
/// the hasher's constant-time check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wraps an encoded hash string.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Returns the encoded hash string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A registered user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub username: Username,
    pub password_hash: PasswordHash,
}

impl UserAccount {
    /// Creates an account from validated parts.
    pub fn new(username: Username, password_hash: PasswordHash) -> Self {
        Self {
            username,
            password_hash,
        }
    }
}
