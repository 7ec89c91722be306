//! Server-side session state.

mod data;

pub use data::SessionData;
