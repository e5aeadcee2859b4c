//! The persistence boundary handlers talk to.

use async_trait::async_trait;
use notas_core::types::DbId;

use crate::models::note::{NewNote, Note};
use crate::repositories::NoteRepo;
use crate::DbPool;

/// Logical note operations, one store round trip each.
///
/// Implemented for [`DbPool`] in production; the API tests provide an
/// in-memory implementation.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes, newest first.
    async fn list(&self) -> Result<Vec<Note>, sqlx::Error>;

    /// Insert a validated note, returning its new id.
    async fn create(&self, note: &NewNote) -> Result<DbId, sqlx::Error>;

    /// Delete by id. `false` means no row matched.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

#[async_trait]
impl NoteStore for DbPool {
    async fn list(&self) -> Result<Vec<Note>, sqlx::Error> {
        NoteRepo::list(self).await
    }

    async fn create(&self, note: &NewNote) -> Result<DbId, sqlx::Error> {
        NoteRepo::create(self, note).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        NoteRepo::delete(self, id).await
    }
}
