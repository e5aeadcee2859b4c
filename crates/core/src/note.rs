//! Note validation rules and the user-facing messages of the notes API.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Returned when a note is created without a title.
pub const MSG_TITLE_REQUIRED: &str = "El título es obligatorio";
/// Returned when a delete targets an id that does not exist.
pub const MSG_NOT_FOUND: &str = "Nota no encontrada";
/// Confirmation for a successful create.
pub const MSG_CREATED: &str = "Nota creada";
/// Confirmation for a successful delete.
pub const MSG_DELETED: &str = "Nota borrada";

// ---------------------------------------------------------------------------
// Storage limits
// ---------------------------------------------------------------------------

/// Returned when a title does not fit the `VARCHAR(255)` column.
pub const MSG_TOO_LONG: &str = "El título no puede superar 255 caracteres";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A title is valid when it is non-empty.
///
/// Whitespace-only titles are accepted; no trimming or normalisation happens
/// server-side.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.is_empty() {
        return Err(CoreError::Validation(MSG_TITLE_REQUIRED.to_string()));
    }
    Ok(())
}

/// The error for a delete that matched no row.
pub fn not_found() -> CoreError {
    CoreError::NotFound(MSG_NOT_FOUND.to_string())
}
