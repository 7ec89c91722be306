//! Library command and query handlers.

mod add_to_library;
mod list_library;

pub use add_to_library::{AddToLibraryCommand, AddToLibraryHandler, AddToLibraryResult};
pub use list_library::{LibraryItem, ListLibraryHandler, ListLibraryQuery, ListLibraryResult};
