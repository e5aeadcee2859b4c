//! Request extractors whose rejections use the API's JSON error shape.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] as an input extractor.
///
/// Rejections are converted through `From<JsonRejection> for AppError`, so a
/// malformed body yields `{"error": "..."}` instead of axum's plain-text reply.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
