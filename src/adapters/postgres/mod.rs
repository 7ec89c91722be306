//! PostgreSQL adapters - database implementations of the repository ports.
//!
//! Row structs derive `sqlx::FromRow` and convert into domain entities via
//! `TryFrom`, so invalid stored data surfaces as a `DatabaseError` instead
//! of a panic.

mod game_repository;
mod library_repository;
mod review_repository;
mod user_repository;

pub use game_repository::PostgresGameRepository;
pub use library_repository::PostgresLibraryRepository;
pub use review_repository::PostgresReviewRepository;
pub use user_repository::PostgresUserRepository;
