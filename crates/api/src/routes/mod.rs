pub mod health;
pub mod item;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Build the item API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                                           list
/// /item                                            create
/// /item/{id}                                       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(item::router())
}
