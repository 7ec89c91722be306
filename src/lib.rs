//! GameFlix - Subscription-gated game catalog backend.
//!
//! A game streaming catalog where titles can carry a subscription tier
//! marker and a user's plan decides what they can save and play. The plan
//! tier policy (normalization, weight comparison, checkout resolution)
//! lives in `domain::plan`; everything else is the catalog, library,
//! review, and account machinery around it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
