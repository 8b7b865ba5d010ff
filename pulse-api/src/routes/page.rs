use axum::response::Html;

/// The single page. Everything dynamic happens against `/api/heatmap`.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
