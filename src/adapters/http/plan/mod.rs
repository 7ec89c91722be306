//! HTTP adapter for the plan endpoints.
//!
//! - `GET /api/plans` - All tiers plus the viewer's current one
//! - `GET /api/plans/checkout?tier=` - Checkout page state
//! - `POST /api/plans/select/{tier}` - Stage a tier ahead of checkout
//! - `POST /api/plans/confirm` - Commit the plan change

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::plan_routes;
