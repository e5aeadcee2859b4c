//! Note entity model and DTOs.

use notas_core::error::CoreError;
use notas_core::note;
use notas_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notas` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Note {
    pub id: DbId,
    #[serde(rename = "titulo")]
    #[sqlx(rename = "titulo")]
    pub title: String,
    /// Never `NULL` on the way out; the list query coalesces it to `""`.
    #[serde(rename = "contenido")]
    #[sqlx(rename = "contenido")]
    pub body: String,
    #[serde(rename = "creado_en")]
    #[sqlx(rename = "creado_en")]
    pub created_at: Timestamp,
}

/// Request body for `POST /notas`. Both fields may be missing or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNote {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "contenido")]
    pub body: Option<String>,
}

/// A validated note ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub body: String,
}

impl CreateNote {
    /// Default absent fields to `""` and check the title.
    pub fn into_new_note(self) -> Result<NewNote, CoreError> {
        let title = self.title.unwrap_or_default();
        note::validate_title(&title)?;
        Ok(NewNote {
            title,
            body: self.body.unwrap_or_default(),
        })
    }
}
