//! PostgreSQL implementation of LibraryRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, GameId, LibraryEntryId, Timestamp};
use crate::domain::library::LibraryEntry;
use crate::domain::user::Username;
use crate::ports::LibraryRepository;

/// PostgreSQL-backed library storage.
pub struct PostgresLibraryRepository {
    pool: PgPool,
}

impl PostgresLibraryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct LibraryRow {
    id: i64,
    username: String,
    game_id: i64,
    added_at: DateTime<Utc>,
}

impl TryFrom<LibraryRow> for LibraryEntry {
    type Error = DomainError;

    fn try_from(row: LibraryRow) -> Result<Self, Self::Error> {
        let username = Username::new(row.username).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid username: {}", e))
        })?;
        Ok(LibraryEntry {
            id: LibraryEntryId::from_i64(row.id),
            username,
            game_id: GameId::from_i64(row.game_id),
            added_at: Timestamp::from_datetime(row.added_at),
        })
    }
}

#[async_trait]
impl LibraryRepository for PostgresLibraryRepository {
    async fn find_by_username(&self, username: &Username) -> Result<Vec<LibraryEntry>, DomainError> {
        let rows: Vec<LibraryRow> = sqlx::query_as(
            r#"
            SELECT id, username, game_id, added_at
            FROM library_entries
            WHERE username = $1
            ORDER BY added_at, id
            "#,
        )
        .bind(username.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list library: {}", e))
        })?;

        rows.into_iter().map(LibraryEntry::try_from).collect()
    }

    async fn find_entry(
        &self,
        username: &Username,
        game_id: GameId,
    ) -> Result<Option<LibraryEntry>, DomainError> {
        let row: Option<LibraryRow> = sqlx::query_as(
            r#"
            SELECT id, username, game_id, added_at
            FROM library_entries
            WHERE username = $1 AND game_id = $2
            "#,
        )
        .bind(username.as_str())
        .bind(game_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find entry: {}", e))
        })?;

        row.map(LibraryEntry::try_from).transpose()
    }

    async fn create(
        &self,
        username: &Username,
        game_id: GameId,
    ) -> Result<LibraryEntry, DomainError> {
        let row: LibraryRow = sqlx::query_as(
            r#"
            INSERT INTO library_entries (username, game_id, added_at)
            VALUES ($1, $2, NOW())
            RETURNING id, username, game_id, added_at
            "#,
        )
        .bind(username.as_str())
        .bind(game_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to create entry: {}", e))
        })?;

        LibraryEntry::try_from(row)
    }
}
