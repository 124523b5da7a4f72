use serde::{Deserialize, Serialize};

use super::session::Role;

/// User record as the backend returns it from `/api/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

/// Successful login response from the backend service.
#[derive(Debug, Deserialize)]
pub struct LoginUpstream {
    pub token: String,
    pub user: BackendUser,
}

/// Session payload exposed to the web client; the bearer token stays
/// server-side.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
}

impl From<&super::session::CurrentUser> for SessionUser {
    fn from(user: &super::session::CurrentUser) -> Self {
        Self {
            user_id: user.user_id.clone(),
            role: user.role,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}
