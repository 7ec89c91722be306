//! HTTP adapter for the catalog endpoints.
//!
//! - `GET /api/games?q=&genre=` - Browse the catalog
//! - `GET /api/games/{id}` - Game detail with access flags
//! - `POST /api/admin/games` - Add a game to the catalog

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::catalog_routes;
