//! PostgreSQL implementation of ReviewRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, GameId, ReviewId, ReviewRating, Timestamp};
use crate::domain::review::{Review, ReviewDraft};
use crate::domain::user::Username;
use crate::ports::ReviewRepository;

/// PostgreSQL-backed review storage.
pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    game_id: i64,
    username: String,
    rating: i16,
    comment: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReviewRow> for Review {
    type Error = DomainError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        let username = Username::new(row.username).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid username: {}", e))
        })?;
        let rating = ReviewRating::try_from_i16(row.rating).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid rating: {}", e))
        })?;
        Ok(Review {
            id: ReviewId::from_i64(row.id),
            game_id: GameId::from_i64(row.game_id),
            username,
            rating,
            comment: row.comment,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn find_all(&self) -> Result<Vec<Review>, DomainError> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
            SELECT id, game_id, username, rating, comment, created_at
            FROM reviews
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list reviews: {}", e))
        })?;

        rows.into_iter().map(Review::try_from).collect()
    }

    async fn find_by_game(&self, game_id: GameId) -> Result<Vec<Review>, DomainError> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
            SELECT id, game_id, username, rating, comment, created_at
            FROM reviews
            WHERE game_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(game_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list reviews: {}", e))
        })?;

        rows.into_iter().map(Review::try_from).collect()
    }

    async fn find_by_game_and_user(
        &self,
        game_id: GameId,
        username: &Username,
    ) -> Result<Option<Review>, DomainError> {
        let row: Option<ReviewRow> = sqlx::query_as(
            r#"
            SELECT id, game_id, username, rating, comment, created_at
            FROM reviews
            WHERE game_id = $1 AND username = $2
            "#,
        )
        .bind(game_id.as_i64())
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find review: {}", e))
        })?;

        row.map(Review::try_from).transpose()
    }

    async fn create(&self, draft: &ReviewDraft) -> Result<Review, DomainError> {
        let row: ReviewRow = sqlx::query_as(
            r#"
            INSERT INTO reviews (game_id, username, rating, comment, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, game_id, username, rating, comment, created_at
            "#,
        )
        .bind(draft.game_id.as_i64())
        .bind(draft.username.as_str())
        .bind(draft.rating.value())
        .bind(&draft.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("reviews_game_id_username_key") {
                    return DomainError::new(
                        ErrorCode::DuplicateReview,
                        "User already reviewed this game",
                    );
                }
            }
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to create review: {}", e))
        })?;

        Review::try_from(row)
    }
}
