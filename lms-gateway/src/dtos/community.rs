use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(
        custom(function = "crate::utils::validation::not_blank"),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    pub title: String,

    #[validate(
        custom(function = "crate::utils::validation::not_blank"),
        length(max = 10000, message = "Content must be at most 10,000 characters")
    )]
    pub content: String,

    #[validate(custom(function = "crate::utils::image::upload_image"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[validate(
        custom(function = "crate::utils::validation::not_blank"),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[validate(
        custom(function = "crate::utils::validation::not_blank"),
        length(max = 10000, message = "Content must be at most 10,000 characters")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReplyRequest {
    #[validate(
        custom(function = "crate::utils::validation::not_blank"),
        length(max = 10000, message = "Content must be at most 10,000 characters")
    )]
    pub content: String,
}
