use axum::response::Html;

pub const HEALTH_TEXT: &str = "Wish Tree backend is running";

pub async fn health() -> &'static str {
    HEALTH_TEXT
}

pub async fn index() -> Html<&'static str> {
    Html(
        r#"<div style="text-align: center; margin-top: 50px;">
    <h1>Wish Tree</h1>
    <p style="color: green;">Status: ONLINE</p>
    <p>POST /api/wishes to hang a wish, GET /api/wishes to read the tree.</p>
</div>"#,
    )
}
