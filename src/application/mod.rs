//! Application layer: use-case handlers wired to ports.

pub mod handlers;
