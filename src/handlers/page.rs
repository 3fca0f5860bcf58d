//! Form page handler

use axum::response::Html;

/// The single-page itinerary form, shipped as a static asset
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
