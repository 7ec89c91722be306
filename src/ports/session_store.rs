//! Server-side session storage port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::SessionData;

/// Port for server-side session state.
///
/// One session per id; the surrounding request infrastructure serializes
/// access for a single user, so implementations only need whole-value
/// load/save semantics.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Creates a new session and returns its id.
    async fn create(&self, data: SessionData) -> Result<SessionId, DomainError>;

    /// Loads session data, or `None` for an unknown/expired id.
    async fn load(&self, id: SessionId) -> Result<Option<SessionData>, DomainError>;

    /// Replaces the stored data for an existing session.
    async fn save(&self, id: SessionId, data: SessionData) -> Result<(), DomainError>;

    /// Destroys a session. Destroying an unknown id is a no-op.
    async fn destroy(&self, id: SessionId) -> Result<(), DomainError>;
}
