//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::user::{PasswordHash, UserAccount, Username};
use crate::ports::UserRepository;

/// PostgreSQL-backed account storage.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    username: String,
    password_hash: String,
}

impl TryFrom<UserRow> for UserAccount {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let username = Username::new(row.username).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid username: {}", e))
        })?;
        Ok(UserAccount::new(
            username,
            PasswordHash::from_encoded(row.password_hash),
        ))
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserAccount>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT username, password_hash
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find user: {}", e))
        })?;

        row.map(UserAccount::try_from).transpose()
    }

    async fn exists(&self, username: &Username) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM users WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to check username: {}", e))
        })?;

        Ok(count > 0)
    }

    async fn create(&self, account: &UserAccount) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            "#,
        )
        .bind(account.username.as_str())
        .bind(account.password_hash.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("users_pkey") {
                    return DomainError::new(ErrorCode::UsernameTaken, "Username is already taken");
                }
            }
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to create user: {}", e))
        })?;

        Ok(())
    }
}
