use anyhow::Error as AnyhowError;
use axum::{
    extract::{Path, RawQuery, State},
    response::Response,
};
use service_core::error::AppError;

use crate::authz::authorize;
use crate::dtos::content::{CreateTopicRequest, UpdateTopicRequest};
use crate::models::{CurrentUser, MaybeUser, Role};
use crate::services::backend_client::relay;
use crate::utils::validation::ValidatedJson;
use crate::AppState;

pub async fn list_topics(
    State(state): State<AppState>,
    user: MaybeUser,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let path = match query {
        Some(query) => format!("/api/topics?{}", query),
        None => "/api/topics".to_string(),
    };

    let upstream = state.backend.get(&path, user.access_token()).await?;
    relay(upstream).await
}

pub async fn get_topic(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let upstream = state
        .backend
        .get(&format!("/api/topics/{}", id), user.access_token())
        .await?;
    relay(upstream).await
}

pub async fn create_topic(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<CreateTopicRequest>,
) -> Result<Response, AppError> {
    authorize(&user, None, Some(Role::Teacher))?;

    let body = serde_json::to_value(&payload).map_err(AnyhowError::new)?;
    let upstream = state
        .backend
        .post("/api/topics", Some(&user.access_token), &body)
        .await?;
    relay(upstream).await
}

pub async fn update_topic(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateTopicRequest>,
) -> Result<Response, AppError> {
    authorize(&user, None, Some(Role::Teacher))?;

    let body = serde_json::to_value(&payload).map_err(AnyhowError::new)?;
    let upstream = state
        .backend
        .put(&format!("/api/topics/{}", id), Some(&user.access_token), &body)
        .await?;
    relay(upstream).await
}

pub async fn delete_topic(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    authorize(&user, None, Some(Role::Teacher))?;

    let upstream = state
        .backend
        .delete(&format!("/api/topics/{}", id), Some(&user.access_token))
        .await?;
    relay(upstream).await
}
