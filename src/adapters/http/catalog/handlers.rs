//! HTTP handlers for the catalog endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::catalog::{
    BrowseCatalogQuery, GetGameDetailQuery, SaveGameCommand,
};
use crate::domain::catalog::CatalogError;
use crate::domain::foundation::GameId;

use super::super::error::ErrorResponse;
use super::super::extract::ClientSession;
use super::super::state::AppState;
use super::dto::{BrowseParams, BrowseResponse, CreateGameRequest, GameDetailResponse, GameResponse};

/// GET /api/games - Browse the catalog with optional filters.
pub async fn browse_games(
    State(state): State<AppState>,
    Query(params): Query<BrowseParams>,
) -> Result<impl IntoResponse, CatalogApiError> {
    let handler = state.browse_catalog_handler();
    let result = handler
        .handle(BrowseCatalogQuery {
            search: params.q,
            genre: params.genre,
        })
        .await?;

    let response = BrowseResponse {
        games: result.games.into_iter().map(GameResponse::from).collect(),
        genres: result.genres,
    };
    Ok(Json(response))
}

/// GET /api/games/{id} - Game detail with viewer-specific access flags.
pub async fn game_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ClientSession(session_id): ClientSession,
) -> Result<impl IntoResponse, CatalogApiError> {
    let handler = state.get_game_detail_handler();
    let result = handler
        .handle(GetGameDetailQuery {
            game_id: GameId::from_i64(id),
            session_id,
        })
        .await?;

    Ok(Json(GameDetailResponse::from(result)))
}

/// POST /api/admin/games - Add a game to the catalog.
pub async fn create_game(
    State(state): State<AppState>,
    Json(request): Json<CreateGameRequest>,
) -> Result<impl IntoResponse, CatalogApiError> {
    let handler = state.save_game_handler();
    let result = handler
        .handle(SaveGameCommand {
            title: request.title,
            genre: request.genre,
            description: request.description,
            cover_url: request.cover_url,
            hero_url: request.hero_url,
            subscription_tier: request.subscription_tier,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(GameResponse::from(result.game))))
}

/// API error type that converts catalog errors to HTTP responses.
pub struct CatalogApiError(CatalogError);

impl From<CatalogError> for CatalogApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CatalogApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            CatalogError::NotFound(_) => (StatusCode::NOT_FOUND, "GAME_NOT_FOUND"),
            CatalogError::ValidationFailed { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            CatalogError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}
