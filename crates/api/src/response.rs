//! Response bodies for the notes API.

use notas_core::types::DbId;
use serde::Serialize;

/// `201` body for `POST /notas`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
    pub mensaje: &'static str,
}

/// Plain confirmation body, e.g. for a successful delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensaje: &'static str,
}
