//! Startup schema bootstrap.

use crate::DbPool;

/// The one table the service owns.
///
/// Microsecond timestamps keep `creado_en` ordering stable for notes created
/// within the same second.
pub const CREATE_NOTES_TABLE: &str = "CREATE TABLE IF NOT EXISTS notas (
    id BIGINT AUTO_INCREMENT PRIMARY KEY,
    titulo VARCHAR(255) NOT NULL,
    contenido TEXT,
    creado_en TIMESTAMP(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6)
)";

/// Create the `notas` table if it does not exist yet. Safe to run on every
/// start.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_NOTES_TABLE).execute(pool).await?;
    tracing::info!("Notes table ready");
    Ok(())
}
