//! Library entry entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GameId, LibraryEntryId, Timestamp};
use crate::domain::user::Username;

/// One game saved to a user's library.
///
/// Adding a game a second time is a no-op; the tier gate is enforced by the
/// add-to-library handler before an entry is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub id: LibraryEntryId,
    pub username: Username,
    pub game_id: GameId,
    pub added_at: Timestamp,
}
