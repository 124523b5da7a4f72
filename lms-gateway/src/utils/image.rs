//! Base64 data-URI image checks with fixed decoded-size ceilings.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::borrow::Cow;
use validator::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// Profile pictures, resized client-side before upload.
    Profile,
    /// Topic cover images.
    Topic,
    /// General uploads, pre-compression.
    Upload,
}

impl ImageKind {
    pub const fn max_bytes(self) -> usize {
        match self {
            ImageKind::Profile => 2 * 1024 * 1024,
            ImageKind::Topic => 5 * 1024 * 1024,
            ImageKind::Upload => 10 * 1024 * 1024,
        }
    }

    const fn limit_label(self) -> &'static str {
        match self {
            ImageKind::Profile => "2MB",
            ImageKind::Topic => "5MB",
            ImageKind::Upload => "10MB",
        }
    }
}

fn error(message: String) -> ValidationError {
    let mut error = ValidationError::new("image");
    error.message = Some(Cow::from(message));
    error
}

/// Check that `data` is a base64 data URI with an image MIME prefix whose
/// decoded payload fits within the ceiling for `kind`.
pub fn validate_image_data_uri(data: &str, kind: ImageKind) -> Result<(), ValidationError> {
    let rest = data.strip_prefix("data:image/").ok_or_else(|| {
        error("Image must be a base64 data URI with an image MIME type".to_string())
    })?;

    let (_, payload) = rest.split_once(";base64,").ok_or_else(|| {
        error("Image must be a base64 data URI with an image MIME type".to_string())
    })?;

    let decoded = BASE64
        .decode(payload.trim())
        .map_err(|_| error("Image payload is not valid base64".to_string()))?;

    if decoded.len() > kind.max_bytes() {
        return Err(error(format!(
            "Image must not exceed {}",
            kind.limit_label()
        )));
    }

    Ok(())
}

pub fn profile_image(data: &str) -> Result<(), ValidationError> {
    validate_image_data_uri(data, ImageKind::Profile)
}

pub fn topic_image(data: &str) -> Result<(), ValidationError> {
    validate_image_data_uri(data, ImageKind::Topic)
}

pub fn upload_image(data: &str) -> Result<(), ValidationError> {
    validate_image_data_uri(data, ImageKind::Upload)
}
