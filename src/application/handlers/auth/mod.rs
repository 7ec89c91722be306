//! Auth command handlers.

mod login_user;
mod register_user;

pub use login_user::{LoginUserCommand, LoginUserHandler, LoginUserResult, LogoutUserHandler};
pub use register_user::{RegisterUserCommand, RegisterUserHandler, RegisterUserResult};
