pub mod equipments;
pub mod loadouts;

use axum::response::Html;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(r#"<h1 style="text-align: center; margin-top: 50px;">Armory API</h1>"#)
}
