//! Adapters - implementations of the port interfaces.
//!
//! - `auth` - Password hashing
//! - `http` - Axum JSON API
//! - `memory` - In-memory adapters for tests and dev
//! - `postgres` - Database-backed repositories

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
