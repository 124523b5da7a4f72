use serde::{Deserialize, Serialize};
use validator::Validate;

/// Content payloads keep the same field names on both sides of the
/// gateway, so these forward unchanged.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    #[validate(
        custom(function = "crate::utils::validation::not_blank"),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    pub title: String,

    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub description: String,

    #[validate(custom(function = "crate::utils::image::topic_image"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopicRequest {
    #[validate(
        custom(function = "crate::utils::validation::not_blank"),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(custom(function = "crate::utils::image::topic_image"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLessonRequest {
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub topic_id: String,

    #[validate(
        custom(function = "crate::utils::validation::not_blank"),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    pub title: String,

    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLessonRequest {
    #[validate(
        custom(function = "crate::utils::validation::not_blank"),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentRequest {
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub lesson_id: String,

    #[validate(
        custom(function = "crate::utils::validation::not_blank"),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    pub title: String,

    /// Question content is opaque to the gateway; the backend owns its
    /// structure.
    pub questions: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssessmentRequest {
    #[validate(
        custom(function = "crate::utils::validation::not_blank"),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<serde_json::Value>,
}
