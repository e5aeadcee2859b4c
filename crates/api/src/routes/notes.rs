//! Route definitions for the notes API, mounted at `/notas`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list).post(notes::create))
        .route("/{id}", delete(notes::delete))
}
