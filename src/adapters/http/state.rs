//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::handlers::auth::{LoginUserHandler, LogoutUserHandler, RegisterUserHandler};
use crate::application::handlers::catalog::{
    BrowseCatalogHandler, GetGameDetailHandler, SaveGameHandler,
};
use crate::application::handlers::library::{AddToLibraryHandler, ListLibraryHandler};
use crate::application::handlers::plan::{ConfirmPlanHandler, SelectPlanHandler, ViewCheckoutHandler};
use crate::application::handlers::review::{ListReviewsHandler, PostReviewHandler};
use crate::ports::{
    GameRepository, LibraryRepository, PasswordHasher, ReviewRepository, SessionStore,
    UserRepository,
};

/// Shared application state containing all dependencies.
///
/// Cloned per request; every dependency is Arc-wrapped so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub games: Arc<dyn GameRepository>,
    pub library: Arc<dyn LibraryRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub password_hasher: Arc<dyn PasswordHasher>,
}

impl AppState {
    /// Create handlers on demand from the shared state.
    pub fn register_user_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(self.users.clone(), self.password_hasher.clone())
    }

    pub fn login_user_handler(&self) -> LoginUserHandler {
        LoginUserHandler::new(
            self.users.clone(),
            self.password_hasher.clone(),
            self.sessions.clone(),
        )
    }

    pub fn logout_user_handler(&self) -> LogoutUserHandler {
        LogoutUserHandler::new(self.sessions.clone())
    }

    pub fn browse_catalog_handler(&self) -> BrowseCatalogHandler {
        BrowseCatalogHandler::new(self.games.clone())
    }

    pub fn get_game_detail_handler(&self) -> GetGameDetailHandler {
        GetGameDetailHandler::new(
            self.games.clone(),
            self.reviews.clone(),
            self.library.clone(),
            self.sessions.clone(),
        )
    }

    pub fn save_game_handler(&self) -> SaveGameHandler {
        SaveGameHandler::new(self.games.clone())
    }

    pub fn add_to_library_handler(&self) -> AddToLibraryHandler {
        AddToLibraryHandler::new(
            self.games.clone(),
            self.library.clone(),
            self.sessions.clone(),
        )
    }

    pub fn list_library_handler(&self) -> ListLibraryHandler {
        ListLibraryHandler::new(
            self.games.clone(),
            self.library.clone(),
            self.sessions.clone(),
        )
    }

    pub fn post_review_handler(&self) -> PostReviewHandler {
        PostReviewHandler::new(
            self.games.clone(),
            self.reviews.clone(),
            self.sessions.clone(),
        )
    }

    pub fn list_reviews_handler(&self) -> ListReviewsHandler {
        ListReviewsHandler::new(self.games.clone(), self.reviews.clone())
    }

    pub fn select_plan_handler(&self) -> SelectPlanHandler {
        SelectPlanHandler::new(self.sessions.clone())
    }

    pub fn view_checkout_handler(&self) -> ViewCheckoutHandler {
        ViewCheckoutHandler::new(self.sessions.clone())
    }

    pub fn confirm_plan_handler(&self) -> ConfirmPlanHandler {
        ConfirmPlanHandler::new(self.sessions.clone())
    }
}
