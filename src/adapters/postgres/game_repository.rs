//! PostgreSQL implementation of GameRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::catalog::{Game, GameDraft};
use crate::domain::foundation::{DomainError, ErrorCode, GameId};
use crate::ports::GameRepository;

/// PostgreSQL-backed catalog storage.
pub struct PostgresGameRepository {
    pool: PgPool,
}

impl PostgresGameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a game.
#[derive(Debug, sqlx::FromRow)]
struct GameRow {
    id: i64,
    title: String,
    genre: Option<String>,
    description: Option<String>,
    cover_url: Option<String>,
    hero_url: Option<String>,
    rating_avg: Option<f64>,
    subscription_tier: Option<String>,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Game {
            id: GameId::from_i64(row.id),
            title: row.title,
            genre: row.genre,
            description: row.description,
            cover_url: row.cover_url,
            hero_url: row.hero_url,
            rating_avg: row.rating_avg,
            subscription_tier: row.subscription_tier,
        }
    }
}

#[async_trait]
impl GameRepository for PostgresGameRepository {
    async fn find_all(&self) -> Result<Vec<Game>, DomainError> {
        let rows: Vec<GameRow> = sqlx::query_as(
            r#"
            SELECT id, title, genre, description, cover_url, hero_url,
                   rating_avg, subscription_tier
            FROM games
            ORDER BY title
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list games: {}", e))
        })?;

        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn find_by_id(&self, id: GameId) -> Result<Option<Game>, DomainError> {
        let row: Option<GameRow> = sqlx::query_as(
            r#"
            SELECT id, title, genre, description, cover_url, hero_url,
                   rating_avg, subscription_tier
            FROM games
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find game: {}", e))
        })?;

        Ok(row.map(Game::from))
    }

    async fn create(&self, draft: &GameDraft) -> Result<Game, DomainError> {
        let row: GameRow = sqlx::query_as(
            r#"
            INSERT INTO games (title, genre, description, cover_url, hero_url, subscription_tier)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, genre, description, cover_url, hero_url,
                      rating_avg, subscription_tier
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.genre)
        .bind(&draft.description)
        .bind(&draft.cover_url)
        .bind(&draft.hero_url)
        .bind(&draft.subscription_tier)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to create game: {}", e))
        })?;

        Ok(Game::from(row))
    }
}
