use axum::{routing::get, Router};

use crate::state::AppState;

/// Plain-text banner served at `/`.
pub const WELCOME_BANNER: &str = "Welcome to the shelf API server";

/// GET / -- liveness banner for humans poking at the server.
async fn root_page() -> &'static str {
    tracing::debug!("Root endpoint hit");
    WELCOME_BANNER
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root_page))
}
