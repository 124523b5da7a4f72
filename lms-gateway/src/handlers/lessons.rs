use anyhow::Error as AnyhowError;
use axum::{
    extract::{Path, RawQuery, State},
    response::Response,
};
use service_core::error::AppError;

use crate::authz::authorize;
use crate::dtos::content::{CreateLessonRequest, UpdateLessonRequest};
use crate::models::{CurrentUser, MaybeUser, Role};
use crate::services::backend_client::relay;
use crate::utils::validation::ValidatedJson;
use crate::AppState;

pub async fn list_lessons(
    State(state): State<AppState>,
    user: MaybeUser,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let path = match query {
        Some(query) => format!("/api/lessons?{}", query),
        None => "/api/lessons".to_string(),
    };

    let upstream = state.backend.get(&path, user.access_token()).await?;
    relay(upstream).await
}

pub async fn get_lesson(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let upstream = state
        .backend
        .get(&format!("/api/lessons/{}", id), user.access_token())
        .await?;
    relay(upstream).await
}

pub async fn create_lesson(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<CreateLessonRequest>,
) -> Result<Response, AppError> {
    authorize(&user, None, Some(Role::Teacher))?;

    let body = serde_json::to_value(&payload).map_err(AnyhowError::new)?;
    let upstream = state
        .backend
        .post("/api/lessons", Some(&user.access_token), &body)
        .await?;
    relay(upstream).await
}

pub async fn update_lesson(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateLessonRequest>,
) -> Result<Response, AppError> {
    authorize(&user, None, Some(Role::Teacher))?;

    let body = serde_json::to_value(&payload).map_err(AnyhowError::new)?;
    let upstream = state
        .backend
        .put(&format!("/api/lessons/{}", id), Some(&user.access_token), &body)
        .await?;
    relay(upstream).await
}

pub async fn delete_lesson(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    authorize(&user, None, Some(Role::Teacher))?;

    let upstream = state
        .backend
        .delete(&format!("/api/lessons/{}", id), Some(&user.access_token))
        .await?;
    relay(upstream).await
}
