//! Static pages and the catch-all 404.

use axum::http::StatusCode;
use axum::response::Html;

use crate::views;

pub async fn home() -> Html<String> {
    Html(views::pages::home())
}

pub async fn about() -> Html<String> {
    Html(views::pages::about())
}

/// Fallback for paths no route or static file matched.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(views::pages::error(StatusCode::NOT_FOUND, "Page not found.")),
    )
}

/// Liveness probe.
pub async fn health_check() -> &'static str {
    "OK"
}
