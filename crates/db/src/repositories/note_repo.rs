//! Repository for the `notas` table.

use notas_core::types::DbId;

use crate::models::note::{NewNote, Note};
use crate::DbPool;

/// Column list for reads. `contenido` is nullable in the schema but the API
/// always exposes a string.
const COLUMNS: &str = "id, titulo, COALESCE(contenido, '') AS contenido, creado_en";

/// Provides the three note statements. Values are always bound, never
/// interpolated into the SQL text.
pub struct NoteRepo;

impl NoteRepo {
    /// List every note, newest first. Notes sharing a timestamp are ordered
    /// by descending id.
    pub async fn list(pool: &DbPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notas ORDER BY creado_en DESC, id DESC");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// Insert a note and return the id the database assigned to it.
    /// `creado_en` is filled in by the column default.
    pub async fn create(pool: &DbPool, input: &NewNote) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query("INSERT INTO notas (titulo, contenido) VALUES (?, ?)")
            .bind(&input.title)
            .bind(&input.body)
            .execute(pool)
            .await?;
        DbId::try_from(result.last_insert_id()).map_err(|e| sqlx::Error::Decode(Box::new(e)))
    }

    /// Permanently delete a note by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notas WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
