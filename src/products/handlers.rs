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
use crate::products::dto::{NewProduct, Product};
use crate::state::AppState;
use crate::validation::parse_id;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product).get(list_products))
        .route("/products/:id", get(get_product).delete(delete_product))
}

#[instrument(skip(state, body))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = NewProduct::parse(&body)?;
    let created = Product::insert(&state.db, &product).await?;
    info!(product_id = created.id, "product created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = Product::list(&state.db, page.limit(), page.offset()).await?;
    Ok(Json(products))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id)?;
    Product::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("product"))
}

#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id)?;
    let deleted = Product::delete(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("product"))?;
    info!(product_id = deleted.id, "product deleted");
    Ok(Json(deleted))
}
