//! Plan tier policy.
//!
//! The one place tier vocabulary lives: a totally ordered tier enumeration
//! with alias normalization, weight comparison for access gating, checkout
//! descriptor metadata, and selection fallback rules. Everything here is a
//! pure function over plain values; no state, no I/O.

mod checkout;
mod descriptor;
mod tier;

pub use checkout::{resolve_checkout, resolve_confirmation, resolve_selection, CheckoutResolution};
pub use descriptor::{descriptor_for, descriptors, PlanDescriptor};
pub use tier::PlanTier;
