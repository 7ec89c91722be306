//! Ports - trait contracts between the application core and adapters.

mod game_repository;
mod library_repository;
mod password_hasher;
mod review_repository;
mod session_store;
mod user_repository;

pub use game_repository::GameRepository;
pub use library_repository::LibraryRepository;
pub use password_hasher::PasswordHasher;
pub use review_repository::ReviewRepository;
pub use session_store::SessionStore;
pub use user_repository::UserRepository;
