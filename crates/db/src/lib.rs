//! MySQL persistence for notes: pool creation, schema bootstrap, the note
//! model, and the [`NoteStore`] boundary used by the HTTP layer.

pub mod config;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;

pub use config::DbConfig;
pub use schema::init_schema;
pub use store::NoteStore;

pub type DbPool = sqlx::MySqlPool;

/// Create a connection pool from the database configuration.
///
/// Each store operation checks a connection out for a single statement and
/// returns it on drop, including on error paths. Waiting for a free
/// connection is bounded by `acquire_timeout_secs`.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(config.connect_options()?)
        .await
}
