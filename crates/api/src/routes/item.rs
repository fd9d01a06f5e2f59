//! Route definitions for the item resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::item;
use crate::state::AppState;

/// Item routes, mounted at the root.
///
/// ```text
/// GET    /items       -> list
/// POST   /item        -> create
/// GET    /item/{id}   -> get_by_id
/// PUT    /item/{id}   -> update
/// DELETE /item/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(item::list))
        .route("/item", post(item::create))
        .route(
            "/item/{id}",
            get(item::get_by_id).put(item::update).delete(item::delete),
        )
}
