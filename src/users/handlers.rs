use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::pagination::Pagination;
use crate::state::AppState;
use crate::users::dto::{PublicUser, UserPatch, UserWrite};
use crate::validation::parse_id;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route(
            "/users/:id",
            get(get_user)
                .put(replace_user)
                .patch(patch_user)
                .delete(delete_user),
        )
}

#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    let user = UserWrite::parse(&body)?;
    let created = PublicUser::insert(&state.db, &user).await?;
    info!(user_id = created.id, "user created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let users = PublicUser::list(&state.db, page.limit(), page.offset()).await?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PublicUser>, ApiError> {
    let id = parse_id(&id)?;
    PublicUser::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("user"))
}

#[instrument(skip(state, body))]
pub async fn replace_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<PublicUser>, ApiError> {
    let id = parse_id(&id)?;
    let user = UserWrite::parse(&body)?;
    PublicUser::replace(&state.db, id, &user)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("user"))
}

#[instrument(skip(state, body))]
pub async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<PublicUser>, ApiError> {
    let id = parse_id(&id)?;
    let patch = UserPatch::parse(&body)?;
    PublicUser::patch(&state.db, id, &patch)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("user"))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PublicUser>, ApiError> {
    let id = parse_id(&id)?;
    let deleted = PublicUser::delete(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    info!(user_id = deleted.id, "user deleted");
    Ok(Json(deleted))
}
