//! HTTP adapter for the auth endpoints.
//!
//! - `POST /api/auth/register` - Create a new account
//! - `POST /api/auth/login` - Sign in and open a session
//! - `POST /api/auth/logout` - Destroy the current session

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::auth_routes;
