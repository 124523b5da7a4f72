//! The request forwarder: every outbound call to the backend service goes
//! through here. One upstream request per client request; no timeout,
//! retry, or circuit breaking.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::Client;
use serde_json::Value;
use service_core::error::AppError;
use service_core::observability::{TracedClientExt, TracedRequest};

use crate::config::BackendSettings;

pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(settings: BackendSettings) -> Self {
        Self {
            client: Client::new(),
            base_url: settings.url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<reqwest::Response, AppError> {
        let url = self.url(path);
        self.dispatch(self.client.traced_get(&url), &url, token, None)
            .await
    }

    pub async fn post(
        &self,
        path: &str,
        token: Option<&str>,
        body: &Value,
    ) -> Result<reqwest::Response, AppError> {
        let url = self.url(path);
        self.dispatch(self.client.traced_post(&url), &url, token, Some(body))
            .await
    }

    pub async fn put(
        &self,
        path: &str,
        token: Option<&str>,
        body: &Value,
    ) -> Result<reqwest::Response, AppError> {
        let url = self.url(path);
        self.dispatch(self.client.traced_put(&url), &url, token, Some(body))
            .await
    }

    pub async fn delete(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<reqwest::Response, AppError> {
        let url = self.url(path);
        self.dispatch(self.client.traced_delete(&url), &url, token, None)
            .await
    }

    async fn dispatch(
        &self,
        request: TracedRequest,
        url: &str,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, AppError> {
        let mut request = request.header("accept", "application/json");

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        request.send().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Request to backend service failed");
            AppError::UpstreamUnreachable(anyhow::Error::new(e))
        })
    }
}

/// Relay an upstream response to the client: 2xx passes through with its
/// body unchanged, anything else is translated to the uniform error shape.
pub async fn relay(upstream: reqwest::Response) -> Result<Response, AppError> {
    let (status, body) = relay_json(upstream).await?;
    if body.is_null() {
        return Ok(status.into_response());
    }
    Ok((status, Json(body)).into_response())
}

/// Like [`relay`], but hands back the parsed body for handlers that need
/// to inspect it (login, ownership checks).
pub async fn relay_json(upstream: reqwest::Response) -> Result<(StatusCode, Value), AppError> {
    let status = upstream.status();
    let body = read_json(upstream).await;

    if status.is_success() {
        return Ok((status, body.unwrap_or(Value::Null)));
    }

    Err(translate_error(status, body))
}

async fn read_json(response: reqwest::Response) -> Option<Value> {
    let bytes = response.bytes().await.ok()?;
    if bytes.is_empty() {
        return None;
    }
    serde_json::from_slice(&bytes).ok()
}

/// Reshape a backend error into this layer's taxonomy. HTTP 422 carries
/// the backend's field-error map through unmodified; other statuses keep
/// their code with a generic message when the body is unparseable.
fn translate_error(status: StatusCode, body: Option<Value>) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED => {
            AppError::Unauthorized(anyhow::anyhow!(message_from(body, "Unauthorized")))
        }
        StatusCode::FORBIDDEN => {
            AppError::Forbidden(anyhow::anyhow!(message_from(body, "Forbidden")))
        }
        StatusCode::NOT_FOUND => {
            AppError::NotFound(anyhow::anyhow!(message_from(body, "Resource not found")))
        }
        StatusCode::UNPROCESSABLE_ENTITY => AppError::UpstreamValidation(
            body.and_then(|b| b.get("errors").cloned())
                .unwrap_or(Value::Null),
        ),
        other => AppError::Upstream(other, message_from(body, "Upstream request failed")),
    }
}

fn message_from(body: Option<Value>, fallback: &str) -> String {
    body.as_ref()
        .and_then(|b| b.get("error").or_else(|| b.get("message")))
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| fallback.to_string())
}
