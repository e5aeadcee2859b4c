use std::sync::Arc;

use notas_db::NoteStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Holds no mutable data of its own; every request goes straight to the store.
#[derive(Clone)]
pub struct AppState {
    /// Persistence boundary (the MySQL pool in production).
    pub store: Arc<dyn NoteStore>,
}

impl AppState {
    pub fn new(store: impl NoteStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
