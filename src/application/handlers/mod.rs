//! Command and query handlers.
//!
//! Each handler owns its ports behind `Arc<dyn Trait>` and exposes one
//! `handle` method. Handlers validate input, enforce the rules that span
//! entities (duplicate checks, tier gating, session resolution), and leave
//! persistence to the adapters.

pub mod auth;
pub mod catalog;
pub mod library;
pub mod plan;
pub mod review;
