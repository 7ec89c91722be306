//! HTTP adapter for the library endpoints.
//!
//! - `GET /api/library` - The signed-in user's saved games
//! - `POST /api/library/add` - Save a game, subject to the tier gate

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::library_routes;
