//! Per-user game library.

mod entry;
mod errors;

pub use entry::LibraryEntry;
pub use errors::LibraryError;
