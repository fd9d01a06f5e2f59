//! Handlers for the item resource (`/items`, `/item`, `/item/{id}`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shelf_core::types::ItemId;
use shelf_store::models::item::{CreateItem, Item, UpdateItem};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /item
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateItem>,
) -> AppResult<(StatusCode, Json<Item>)> {
    input.validate()?;
    let item = state.store.create(input)?;

    tracing::info!(item_id = %item.id, "Item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /items
pub async fn list(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.list())
}

/// GET /item/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> AppResult<Json<Item>> {
    let item = state.store.get(&id)?;
    Ok(Json(item))
}

/// PUT /item/{id}
///
/// Replaces every mutable field; `id` and `created_at` never change.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    AppJson(input): AppJson<UpdateItem>,
) -> AppResult<Json<Item>> {
    let item = state.store.update(&id, input)?;

    tracing::info!(item_id = %item.id, "Item updated");

    Ok(Json(item))
}

/// DELETE /item/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> AppResult<StatusCode> {
    state.store.delete(&id)?;

    tracing::info!(item_id = %id, "Item deleted");

    Ok(StatusCode::NO_CONTENT)
}
