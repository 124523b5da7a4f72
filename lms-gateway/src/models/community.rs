use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Community post as the backend returns it; only the fields the gateway
/// inspects for ownership checks are required.
#[derive(Debug, Clone, Deserialize)]
pub struct CommunityPost {
    pub id: String,
    pub author_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Community reply as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct CommunityReply {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
