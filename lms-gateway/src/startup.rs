use axum::{
    middleware::from_fn,
    routing::{delete, get, post, put},
    Router,
};
use secrecy::ExposeSecret;
use service_core::middleware::{
    metrics::metrics_middleware, security_headers::security_headers_middleware,
    tracing::request_id_middleware,
};
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::Key, Expiry, MemoryStore, SessionManagerLayer};

use crate::handlers::{app, assessments, community, lessons, metrics, session, topics, users};
use crate::middleware::auth::require_auth;
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    // Session setup
    let session_store = MemoryStore::default();
    let signing_key = Key::try_from(
        state
            .settings
            .server
            .session_secret
            .expose_secret()
            .as_bytes(),
    )
    .expect("session secret must be at least 64 bytes");
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // TLS terminates at the edge proxy
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)))
        .with_signed(signing_key);

    // The user subtree is authenticated in full; every handler still runs
    // the shared authorization guard for its target.
    let user_routes = Router::new()
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/api/users/:id/password", put(users::change_password))
        .route("/api/users/:id/profile", put(users::update_profile))
        .route(
            "/api/users/:id/profile-image",
            put(users::update_profile_image),
        )
        .route_layer(from_fn(require_auth));

    Router::new()
        .route("/health", get(app::health_check))
        .route("/metrics", get(metrics::metrics))
        .route("/topics/:slug", get(app::legacy_topic_redirect))
        .route("/api/login", post(session::login))
        .route("/api/logout", post(session::logout))
        .route("/api/session", get(session::get_session))
        .route(
            "/api/topics",
            get(topics::list_topics).post(topics::create_topic),
        )
        .route(
            "/api/topics/:id",
            get(topics::get_topic)
                .put(topics::update_topic)
                .delete(topics::delete_topic),
        )
        .route(
            "/api/lessons",
            get(lessons::list_lessons).post(lessons::create_lesson),
        )
        .route(
            "/api/lessons/:id",
            get(lessons::get_lesson)
                .put(lessons::update_lesson)
                .delete(lessons::delete_lesson),
        )
        .route(
            "/api/assessments",
            get(assessments::list_assessments).post(assessments::create_assessment),
        )
        .route(
            "/api/assessments/:id",
            get(assessments::get_assessment)
                .put(assessments::update_assessment)
                .delete(assessments::delete_assessment),
        )
        .route(
            "/api/community/posts",
            get(community::list_posts).post(community::create_post),
        )
        .route(
            "/api/community/posts/:id",
            get(community::get_post)
                .put(community::update_post)
                .delete(community::delete_post),
        )
        .route(
            "/api/community/posts/:id/replies",
            get(community::list_replies).post(community::create_reply),
        )
        .route("/api/community/replies/:id", delete(community::delete_reply))
        .merge(user_routes)
        .layer(session_layer)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
