use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Browser page at `/`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(pages::index))
}
