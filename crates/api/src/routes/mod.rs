pub mod health;
pub mod notes;
pub mod pages;

use axum::Router;

use crate::handlers::fallback;
use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /                 page      GET
/// /health           liveness  GET
/// /notas            notes     GET, POST
/// /notas/{id}       notes     DELETE
/// ```
///
/// Anything else gets a JSON 404, or a JSON 405 when only the method is wrong.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(health::router())
        .nest("/notas", notes::router())
        .fallback(fallback::route_not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
}
