// src/handlers/pages.rs

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../templates/index.html");
const ADMIN_HTML: &str = include_str!("../../templates/admin.html");

/// Student landing page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn admin_page() -> Html<&'static str> {
    Html(ADMIN_HTML)
}
