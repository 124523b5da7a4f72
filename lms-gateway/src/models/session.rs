use anyhow::anyhow;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use tower_sessions::Session;

/// Session key holding the authenticated caller's context.
pub const SESSION_USER_KEY: &str = "user";

/// Roles in the backend's vocabulary. The gateway additionally accepts
/// `creator` as a request-side synonym for `teacher`; see
/// [`crate::dtos::RequestedRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
    Teacher,
}

/// Authenticated caller context, written by the login handler and threaded
/// explicitly into every handler that needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user_id: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub access_token: String,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

async fn session_user<S: Send + Sync>(
    parts: &mut Parts,
    state: &S,
) -> Result<Option<CurrentUser>, AppError> {
    let session = Session::from_request_parts(parts, state)
        .await
        .map_err(|_| AppError::Internal(anyhow!("Session layer missing from router")))?;

    Ok(session.get(SESSION_USER_KEY).await.unwrap_or(None))
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        session_user(parts, state)
            .await?
            .ok_or_else(|| AppError::Unauthorized(anyhow!("Authentication required")))
    }
}

/// Optional caller context for endpoints that forward with a bearer token
/// when a session exists and unauthenticated otherwise.
pub struct MaybeUser(pub Option<CurrentUser>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(session_user(parts, state).await?))
    }
}

impl MaybeUser {
    pub fn access_token(&self) -> Option<&str> {
        self.0.as_ref().map(|user| user.access_token.as_str())
    }
}
