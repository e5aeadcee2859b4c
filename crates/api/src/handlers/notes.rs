//! Handlers for the `/notas` resource.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use notas_core::note;
use notas_core::types::DbId;
use notas_db::models::note::{CreateNote, Note};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// GET /notas
///
/// Every note, newest first. An empty table yields `[]`.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Note>>> {
    let notes = state.store.list().await?;
    tracing::info!(count = notes.len(), "Listed notes");
    Ok(Json(notes))
}

/// POST /notas
///
/// Requires a non-empty `titulo`; `contenido` defaults to `""`.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNote>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let new_note = input
        .into_new_note()
        .inspect_err(|_| tracing::warn!("Rejected note without a title"))?;

    let id = state.store.create(&new_note).await?;
    tracing::info!(id, "Note created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            mensaje: note::MSG_CREATED,
        }),
    ))
}

/// DELETE /notas/{id}
///
/// An id that is not an integer cannot name a note, so it gets the same 404
/// as an id that was never issued.
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = id.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Delete with a non-numeric id");
        note::not_found()
    })?;

    if !state.store.delete(id).await? {
        tracing::warn!(id, "Delete of a missing note");
        return Err(note::not_found().into());
    }

    tracing::info!(id, "Note deleted");
    Ok(Json(MessageResponse {
        mensaje: note::MSG_DELETED,
    }))
}
