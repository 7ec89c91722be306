//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Server-side pepper mixed into every password hash. Changing it
    /// invalidates all stored hashes.
    pub password_pepper: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.password_pepper.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__PASSWORD_PEPPER"));
        }
        if self.password_pepper.len() < 16 {
            return Err(ValidationError::PepperTooShort);
        }
        Ok(())
    }
}
