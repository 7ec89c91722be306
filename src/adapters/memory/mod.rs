//! In-memory adapters for tests and development.

mod game_repository;
mod library_repository;
mod review_repository;
mod session_store;
mod user_repository;

pub use game_repository::InMemoryGameRepository;
pub use library_repository::InMemoryLibraryRepository;
pub use review_repository::InMemoryReviewRepository;
pub use session_store::InMemorySessionStore;
pub use user_repository::InMemoryUserRepository;
