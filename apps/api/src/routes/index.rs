use axum::response::Html;

/// GET /
/// The single upload page. The form posts to `/api/v1/critique` and renders
/// whatever comes back, critique text or error message.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
