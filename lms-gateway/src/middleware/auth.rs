use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use service_core::error::AppError;
use tower_sessions::Session;

use crate::models::{CurrentUser, SESSION_USER_KEY};

/// Reject requests without an authenticated session with a 401 JSON body.
/// This is an API surface; there is no login page to redirect to.
pub async fn require_auth(session: Session, request: Request<Body>, next: Next) -> Response {
    let user: Option<CurrentUser> = session.get(SESSION_USER_KEY).await.unwrap_or(None);

    if user.is_none() {
        return AppError::Unauthorized(anyhow!("Authentication required")).into_response();
    }

    next.run(request).await
}
