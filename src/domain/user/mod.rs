//! User accounts and credentials.

mod account;
mod errors;

pub use account::{PasswordHash, UserAccount, Username};
pub use errors::AuthError;
