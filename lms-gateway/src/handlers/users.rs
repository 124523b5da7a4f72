use anyhow::Error as AnyhowError;
use axum::{
    extract::{Path, State},
    response::Response,
};
use service_core::error::AppError;

use crate::authz::{authorize, authorize_user_delete};
use crate::dtos::users::{
    ChangePasswordRequest, CreateUserRequest, ProfileImageRequest, UpdateProfileRequest,
    UpdateUserRequest,
};
use crate::models::{CurrentUser, Role};
use crate::services::backend_client::relay;
use crate::utils::validation::ValidatedJson;
use crate::AppState;

pub async fn list_users(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Response, AppError> {
    authorize(&user, None, Some(Role::Admin))?;

    let upstream = state
        .backend
        .get("/api/users", Some(&user.access_token))
        .await?;
    relay(upstream).await
}

pub async fn create_user(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<Response, AppError> {
    authorize(&user, None, Some(Role::Admin))?;

    let body = serde_json::to_value(&payload).map_err(AnyhowError::new)?;
    let upstream = state
        .backend
        .post("/api/users", Some(&user.access_token), &body)
        .await?;
    relay(upstream).await
}

pub async fn get_user(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    authorize(&user, Some(&id), None)?;

    let upstream = state
        .backend
        .get(&format!("/api/users/{}", id), Some(&user.access_token))
        .await?;
    relay(upstream).await
}

pub async fn update_user(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<Response, AppError> {
    authorize(&user, Some(&id), None)?;

    let body = serde_json::to_value(&payload).map_err(AnyhowError::new)?;
    let upstream = state
        .backend
        .put(&format!("/api/users/{}", id), Some(&user.access_token), &body)
        .await?;
    relay(upstream).await
}

pub async fn delete_user(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    authorize_user_delete(&user, &id)?;

    let upstream = state
        .backend
        .delete(&format!("/api/users/{}", id), Some(&user.access_token))
        .await?;
    relay(upstream).await
}

pub async fn change_password(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> Result<Response, AppError> {
    authorize(&user, Some(&id), None)?;

    let body = serde_json::to_value(&payload).map_err(AnyhowError::new)?;
    let upstream = state
        .backend
        .put(
            &format!("/api/users/{}/password", id),
            Some(&user.access_token),
            &body,
        )
        .await?;
    relay(upstream).await
}

pub async fn update_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> Result<Response, AppError> {
    authorize(&user, Some(&id), None)?;

    let body = serde_json::to_value(&payload).map_err(AnyhowError::new)?;
    let upstream = state
        .backend
        .put(
            &format!("/api/users/{}/profile", id),
            Some(&user.access_token),
            &body,
        )
        .await?;
    relay(upstream).await
}

pub async fn update_profile_image(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ProfileImageRequest>,
) -> Result<Response, AppError> {
    authorize(&user, Some(&id), None)?;

    let body = serde_json::to_value(&payload).map_err(AnyhowError::new)?;
    let upstream = state
        .backend
        .put(
            &format!("/api/users/{}/profile-image", id),
            Some(&user.access_token),
            &body,
        )
        .await?;
    relay(upstream).await
}
