use anyhow::anyhow;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use service_core::error::AppError;
use tower_sessions::Session;

use crate::dtos::session::LoginRequest;
use crate::models::user::{LoginUpstream, SessionUser};
use crate::models::{CurrentUser, MaybeUser, SESSION_USER_KEY};
use crate::services::backend_client::relay_json;
use crate::utils::validation::ValidatedJson;
use crate::AppState;

/// Forward credentials to the backend and bootstrap the session from its
/// response. The bearer token never leaves the server side.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Response, AppError> {
    let body = serde_json::to_value(&payload).map_err(anyhow::Error::new)?;
    let upstream = state.backend.post("/api/login", None, &body).await?;
    let (_, value) = relay_json(upstream).await?;

    let login: LoginUpstream = serde_json::from_value(value)
        .map_err(|e| AppError::Internal(anyhow!("Unexpected login payload from backend: {}", e)))?;

    let user = CurrentUser {
        user_id: login.user.id.clone(),
        role: login.user.role,
        first_name: login.user.first_name.clone(),
        last_name: login.user.last_name.clone(),
        access_token: login.token,
    };

    session
        .insert(SESSION_USER_KEY, &user)
        .await
        .map_err(|e| AppError::Internal(anyhow!("Failed to persist session: {}", e)))?;

    tracing::info!(user_id = %user.user_id, "User logged in");

    Ok(Json(json!({ "user": login.user })).into_response())
}

pub async fn logout(session: Session) -> Result<Response, AppError> {
    session.clear().await;

    Ok(Json(json!({ "message": "Logged out" })).into_response())
}

/// Session bootstrap for the web client; never exposes the bearer token.
pub async fn get_session(user: MaybeUser) -> Result<Response, AppError> {
    let body = match &user.0 {
        Some(current) => json!({ "user": SessionUser::from(current) }),
        None => json!({ "user": null }),
    };

    Ok(Json(body).into_response())
}
