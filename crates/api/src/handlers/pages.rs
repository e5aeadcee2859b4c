//! Handlers for the browser-facing page.

use axum::response::Html;

/// The single-page client. Static: no server-side templating, so every
/// response is byte-identical.
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
