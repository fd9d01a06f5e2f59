use std::sync::Arc;

use shelf_store::ItemStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store itself sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide item repository.
    pub store: Arc<ItemStore>,
}

impl AppState {
    pub fn new(store: Arc<ItemStore>) -> Self {
        Self { store }
    }
}
