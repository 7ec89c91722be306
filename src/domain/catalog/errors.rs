//! Catalog errors.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{GameId, ValidationError};

/// Errors from catalog operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Game was not found.
    NotFound(GameId),

    /// Game input failed validation.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl CatalogError {
    pub fn not_found(id: GameId) -> Self {
        CatalogError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        CatalogError::Infrastructure(message.into())
    }

    /// Returns a user-facing message.
    pub fn message(&self) -> String {
        match self {
            CatalogError::NotFound(_) => "Game not found".to_string(),
            CatalogError::ValidationFailed { message, .. } => message.clone(),
            CatalogError::Infrastructure(_) => "An internal error occurred".to_string(),
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::TooLong { field, .. } => field.clone(),
        };
        CatalogError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CatalogError {}
