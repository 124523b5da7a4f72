pub mod community;
pub mod content;
pub mod session;
pub mod users;

use serde::{Deserialize, Serialize, Serializer};

/// Role vocabulary accepted from the web client. The backend knows
/// `admin | student | teacher`; this layer additionally accepts `creator`
/// and forwards it as `teacher`. The mapping is one-way: backend
/// responses pass through untranslated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestedRole {
    Admin,
    Student,
    Creator,
}

impl RequestedRole {
    pub fn backend_name(self) -> &'static str {
        match self {
            RequestedRole::Admin => "admin",
            RequestedRole::Student => "student",
            RequestedRole::Creator => "teacher",
        }
    }
}

impl Serialize for RequestedRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.backend_name())
    }
}
