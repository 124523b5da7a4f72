use axum::{
    extract::Path,
    response::{IntoResponse, Redirect},
    Json,
};
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

/// Legacy topic URLs predate the dashboard; they all land there now.
pub async fn legacy_topic_redirect(Path(_slug): Path<String>) -> impl IntoResponse {
    Redirect::to("/dashboard")
}
