use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::services::metrics::render_metrics;

pub async fn metrics() -> impl IntoResponse {
    match render_metrics() {
        Some(body) => body.into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics recorder not initialized")
            .into_response(),
    }
}
