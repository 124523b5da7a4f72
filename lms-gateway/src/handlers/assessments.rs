use anyhow::Error as AnyhowError;
use axum::{
    extract::{Path, RawQuery, State},
    response::Response,
};
use service_core::error::AppError;

use crate::authz::authorize;
use crate::dtos::content::{CreateAssessmentRequest, UpdateAssessmentRequest};
use crate::models::{CurrentUser, MaybeUser, Role};
use crate::services::backend_client::relay;
use crate::utils::validation::ValidatedJson;
use crate::AppState;

pub async fn list_assessments(
    State(state): State<AppState>,
    user: MaybeUser,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let path = match query {
        Some(query) => format!("/api/assessments?{}", query),
        None => "/api/assessments".to_string(),
    };

    let upstream = state.backend.get(&path, user.access_token()).await?;
    relay(upstream).await
}

pub async fn get_assessment(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let upstream = state
        .backend
        .get(&format!("/api/assessments/{}", id), user.access_token())
        .await?;
    relay(upstream).await
}

pub async fn create_assessment(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<CreateAssessmentRequest>,
) -> Result<Response, AppError> {
    authorize(&user, None, Some(Role::Teacher))?;

    let body = serde_json::to_value(&payload).map_err(AnyhowError::new)?;
    let upstream = state
        .backend
        .post("/api/assessments", Some(&user.access_token), &body)
        .await?;
    relay(upstream).await
}

pub async fn update_assessment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateAssessmentRequest>,
) -> Result<Response, AppError> {
    authorize(&user, None, Some(Role::Teacher))?;

    let body = serde_json::to_value(&payload).map_err(AnyhowError::new)?;
    let upstream = state
        .backend
        .put(
            &format!("/api/assessments/{}", id),
            Some(&user.access_token),
            &body,
        )
        .await?;
    relay(upstream).await
}

pub async fn delete_assessment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    authorize(&user, None, Some(Role::Teacher))?;

    let upstream = state
        .backend
        .delete(&format!("/api/assessments/{}", id), Some(&user.access_token))
        .await?;
    relay(upstream).await
}
