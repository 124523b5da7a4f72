use anyhow::anyhow;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// JSON extractor that runs the payload's `validator` rules before the
/// handler sees it. Failures become 400 responses carrying the rule's
/// message.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(anyhow!("Invalid JSON payload: {}", e)))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

/// Required-string rule: present but blank-after-trim values are rejected.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some(Cow::from("Field must not be empty"));
        return Err(error);
    }
    Ok(())
}
