//! Domain layer - pure types and logic, no I/O.

pub mod catalog;
pub mod foundation;
pub mod library;
pub mod plan;
pub mod review;
pub mod session;
pub mod user;
