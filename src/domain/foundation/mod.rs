//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form
//! the vocabulary of the GameFlix domain.

mod errors;
mod ids;
mod rating;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{GameId, LibraryEntryId, ReviewId, SessionId};
pub use rating::ReviewRating;
pub use timestamp::Timestamp;
