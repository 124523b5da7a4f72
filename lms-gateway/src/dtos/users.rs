use serde::{Deserialize, Serialize};
use validator::Validate;

use super::RequestedRole;

/// User payloads cross a vocabulary boundary: the web client speaks
/// camelCase, the backend snake_case. The mapping is declared once here
/// rather than rename-by-hand in each handler.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all(serialize = "snake_case", deserialize = "camelCase"))]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 50, message = "First name must be between 2 and 50 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, max = 50, message = "Last name must be between 2 and 50 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,

    pub role: RequestedRole,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all(serialize = "snake_case", deserialize = "camelCase"))]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 50, message = "First name must be between 2 and 50 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[validate(length(min = 2, max = 50, message = "Last name must be between 2 and 50 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RequestedRole>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all(serialize = "snake_case", deserialize = "camelCase"))]
pub struct ChangePasswordRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub new_password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all(serialize = "snake_case", deserialize = "camelCase"))]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 50, message = "First name must be between 2 and 50 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[validate(length(min = 2, max = 50, message = "Last name must be between 2 and 50 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ProfileImageRequest {
    #[validate(custom(function = "crate::utils::image::profile_image"))]
    pub image: String,
}
