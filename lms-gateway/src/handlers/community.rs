use anyhow::{anyhow, Error as AnyhowError};
use axum::{
    extract::{Path, RawQuery, State},
    response::Response,
};
use service_core::error::AppError;

use crate::authz::authorize;
use crate::dtos::community::{CreatePostRequest, CreateReplyRequest, UpdatePostRequest};
use crate::models::community::{CommunityPost, CommunityReply};
use crate::models::{CurrentUser, MaybeUser};
use crate::services::backend_client::{relay, relay_json};
use crate::utils::validation::ValidatedJson;
use crate::AppState;

pub async fn list_posts(
    State(state): State<AppState>,
    user: MaybeUser,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let path = match query {
        Some(query) => format!("/api/community/posts?{}", query),
        None => "/api/community/posts".to_string(),
    };

    let upstream = state.backend.get(&path, user.access_token()).await?;
    relay(upstream).await
}

pub async fn get_post(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let upstream = state
        .backend
        .get(&format!("/api/community/posts/{}", id), user.access_token())
        .await?;
    relay(upstream).await
}

pub async fn create_post(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<CreatePostRequest>,
) -> Result<Response, AppError> {
    let body = serde_json::to_value(&payload).map_err(AnyhowError::new)?;
    let upstream = state
        .backend
        .post("/api/community/posts", Some(&user.access_token), &body)
        .await?;
    relay(upstream).await
}

/// The backend owns post records, so ownership checks fetch the post
/// before deciding.
async fn fetch_post(
    state: &AppState,
    user: &CurrentUser,
    id: &str,
) -> Result<CommunityPost, AppError> {
    let upstream = state
        .backend
        .get(
            &format!("/api/community/posts/{}", id),
            Some(&user.access_token),
        )
        .await?;
    let (_, body) = relay_json(upstream).await?;

    serde_json::from_value(body)
        .map_err(|e| AppError::Internal(anyhow!("Unexpected post payload from backend: {}", e)))
}

async fn fetch_reply(
    state: &AppState,
    user: &CurrentUser,
    id: &str,
) -> Result<CommunityReply, AppError> {
    let upstream = state
        .backend
        .get(
            &format!("/api/community/replies/{}", id),
            Some(&user.access_token),
        )
        .await?;
    let (_, body) = relay_json(upstream).await?;

    serde_json::from_value(body)
        .map_err(|e| AppError::Internal(anyhow!("Unexpected reply payload from backend: {}", e)))
}

pub async fn update_post(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdatePostRequest>,
) -> Result<Response, AppError> {
    let post = fetch_post(&state, &user, &id).await?;
    authorize(&user, Some(&post.author_id), None)?;

    let body = serde_json::to_value(&payload).map_err(AnyhowError::new)?;
    let upstream = state
        .backend
        .put(
            &format!("/api/community/posts/{}", id),
            Some(&user.access_token),
            &body,
        )
        .await?;
    relay(upstream).await
}

pub async fn delete_post(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let post = fetch_post(&state, &user, &id).await?;
    authorize(&user, Some(&post.author_id), None)?;

    let upstream = state
        .backend
        .delete(
            &format!("/api/community/posts/{}", id),
            Some(&user.access_token),
        )
        .await?;
    relay(upstream).await
}

pub async fn list_replies(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let upstream = state
        .backend
        .get(
            &format!("/api/community/posts/{}/replies", id),
            user.access_token(),
        )
        .await?;
    relay(upstream).await
}

pub async fn create_reply(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CreateReplyRequest>,
) -> Result<Response, AppError> {
    let body = serde_json::to_value(&payload).map_err(AnyhowError::new)?;
    let upstream = state
        .backend
        .post(
            &format!("/api/community/posts/{}/replies", id),
            Some(&user.access_token),
            &body,
        )
        .await?;
    relay(upstream).await
}

pub async fn delete_reply(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let reply = fetch_reply(&state, &user, &id).await?;
    authorize(&user, Some(&reply.author_id), None)?;

    let upstream = state
        .backend
        .delete(
            &format!("/api/community/replies/{}", id),
            Some(&user.access_token),
        )
        .await?;
    relay(upstream).await
}
