//! Test helpers: an in-process backend stub that records every forwarded
//! request, and a gateway router wired to it.

#![allow(dead_code)]

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use lms_gateway::config::{BackendSettings, ServerSettings, Settings, TelemetrySettings};
use lms_gateway::services::backend_client::BackendClient;
use lms_gateway::startup::build_router;
use lms_gateway::AppState;
use secrecy::Secret;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

pub const TEST_SESSION_SECRET: &str =
    "test-session-secret-test-session-secret-test-session-secret-test-session-secret";

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

/// Records forwarded requests and serves canned responses. Unstubbed
/// routes answer 200 `{"ok": true}`.
#[derive(Clone, Default)]
pub struct BackendStub {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<HashMap<(String, String), (u16, Value)>>>,
}

impl BackendStub {
    pub fn stub(&self, method: &str, path: &str, status: u16, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

async fn record_and_respond(State(stub): State<BackendStub>, request: Request) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(String::from);
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    let body = if bytes.is_empty() {
        None
    } else {
        serde_json::from_slice(&bytes).ok()
    };

    stub.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query,
        authorization,
        body,
    });

    let canned = stub.responses.lock().unwrap().get(&(method, path)).cloned();
    match canned {
        Some((status, body)) => (
            StatusCode::from_u16(status).expect("stubbed status code is valid"),
            Json(body),
        )
            .into_response(),
        None => Json(json!({ "ok": true })).into_response(),
    }
}

pub struct TestApp {
    pub app: Router,
    pub backend: BackendStub,
}

/// Spawn the backend stub on a random port and build a gateway router
/// pointed at it.
pub async fn spawn_app() -> TestApp {
    let stub = BackendStub::default();
    let backend_router = Router::new()
        .fallback(record_and_respond)
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind backend stub to a random port");
    let backend_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, backend_router).await.unwrap();
    });

    TestApp {
        app: gateway_router(backend_url),
        backend: stub,
    }
}

/// Build a gateway router against an arbitrary backend URL (e.g. a closed
/// port, for unreachable-backend tests).
pub fn gateway_router(backend_url: String) -> Router {
    let settings = Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            session_secret: Secret::new(TEST_SESSION_SECRET.to_string()),
        },
        backend: BackendSettings { url: backend_url },
        telemetry: TelemetrySettings::default(),
    };

    let backend = Arc::new(BackendClient::new(settings.backend.clone()));
    build_router(AppState::new(backend, settings))
}

impl TestApp {
    /// Log in through the real login flow and hand back the session cookie.
    pub async fn login_as(&self, id: &str, role: &str) -> String {
        self.backend.stub(
            "POST",
            "/api/login",
            200,
            json!({
                "token": format!("token-{}", id),
                "user": {
                    "id": id,
                    "first_name": "Test",
                    "last_name": "User",
                    "email": format!("user-{}@example.com", id),
                    "role": role,
                }
            }),
        );

        let response = self
            .request(
                "POST",
                "/api/login",
                None,
                Some(json!({
                    "email": format!("user-{}@example.com", id),
                    "password": "password123",
                })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK, "login must succeed");

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("login response must set a session cookie")
            .to_str()
            .unwrap();
        cookie.split(';').next().unwrap().to_string()
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.app.clone().oneshot(request).await.unwrap()
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}
