use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use notas_core::error::CoreError;
use notas_core::note;
use serde_json::json;

/// Message returned for every infrastructure failure. Driver details are
/// logged, never sent to the client.
pub const MSG_INTERNAL: &str = "Error interno del servidor";

/// Returned when the request body exceeds the configured limit.
pub const MSG_BODY_TOO_LARGE: &str = "El cuerpo de la petición es demasiado grande";

/// Returned when a request runs past `REQUEST_TIMEOUT_SECS`.
pub const MSG_TIMEOUT: &str = "La petición tardó demasiado";

pub const MSG_ROUTE_NOT_FOUND: &str = "Ruta no encontrada";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Método no permitido";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{"error": "..."}` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `notas_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store could not be reached or a statement failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request body exceeded the configured limit.
    #[error("Payload too large")]
    PayloadTooLarge,

    /// The request did not finish within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// No route matches the request path.
    #[error("Route not found")]
    RouteNotFound,

    /// The path exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// An internal error with a message for the logs.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::PayloadTooLarge => {
                (StatusCode::PAYLOAD_TOO_LARGE, MSG_BODY_TOO_LARGE.to_string())
            }
            AppError::Timeout => (StatusCode::REQUEST_TIMEOUT, MSG_TIMEOUT.to_string()),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, MSG_ROUTE_NOT_FOUND.to_string()),
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, MSG_METHOD_NOT_ALLOWED.to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

/// Body rejections from the JSON extractor.
///
/// Oversized bodies keep their 413; every other rejection (syntax, wrong
/// content type, wrong shape) becomes a 400 with the extractor's explanation.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge;
        }
        AppError::BadRequest(format!("JSON inválido: {}", rejection.body_text()))
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - SQLSTATE `22001` (value too long for its column) maps to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().as_deref() == Some("22001") {
            tracing::warn!(error = %db_err, "Value does not fit its column");
            return (StatusCode::BAD_REQUEST, note::MSG_TOO_LONG.to_string());
        }
    }
    tracing::error!(error = %err, "Database error");
    (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
}
