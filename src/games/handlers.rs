use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::extract::Json;
use crate::games::catalog::{CatalogList, Game};
use crate::state::AppState;
use crate::validation::parse_id;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(list_games))
        .route("/games/:id", get(get_game))
}

#[instrument(skip(state))]
pub async fn list_games(State(state): State<AppState>) -> Result<Json<CatalogList>, ApiError> {
    let games = state.catalog.games().await?;
    Ok(Json(CatalogList(games)))
}

#[instrument(skip(state))]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Game>, ApiError> {
    let id = parse_id(&id)?;
    state
        .catalog
        .game(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("game"))
}
