mod common;

use axum::http::StatusCode;
use common::{response_json, spawn_app};
use serde_json::json;

#[tokio::test]
async fn topics_are_readable_without_a_session() {
    let app = spawn_app().await;
    app.backend
        .stub("GET", "/api/topics", 200, json!([{ "id": "1" }]));

    let response = app.request("GET", "/api/topics", None, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, json!([{ "id": "1" }]));
}

#[tokio::test]
async fn students_cannot_create_topics() {
    let app = spawn_app().await;
    let cookie = app.login_as("2", "student").await;

    let response = app
        .request(
            "POST",
            "/api/topics",
            Some(&cookie),
            Some(json!({ "title": "Ownership", "description": "Moves and borrows" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(app.backend.requests_to("POST", "/api/topics").is_empty());
}

#[tokio::test]
async fn teachers_can_create_topics() {
    let app = spawn_app().await;
    let cookie = app.login_as("3", "teacher").await;

    let payload = json!({ "title": "Ownership", "description": "Moves and borrows" });
    let response = app
        .request("POST", "/api/topics", Some(&cookie), Some(payload.clone()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let forwarded = app.backend.requests_to("POST", "/api/topics");
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].body, Some(payload));
}

#[tokio::test]
async fn admins_can_manage_topics() {
    let app = spawn_app().await;
    let cookie = app.login_as("1", "admin").await;

    let response = app
        .request("DELETE", "/api/topics/9", Some(&cookie), None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.backend.requests_to("DELETE", "/api/topics/9").len(), 1);
}

#[tokio::test]
async fn blank_topic_title_is_rejected() {
    let app = spawn_app().await;
    let cookie = app.login_as("3", "teacher").await;

    let response = app
        .request(
            "POST",
            "/api/topics",
            Some(&cookie),
            Some(json!({ "title": "  ", "description": "d" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.backend.requests_to("POST", "/api/topics").is_empty());
}

#[tokio::test]
async fn lessons_require_teacher_role_to_create() {
    let app = spawn_app().await;
    let cookie = app.login_as("2", "student").await;

    let response = app
        .request(
            "POST",
            "/api/lessons",
            Some(&cookie),
            Some(json!({
                "topicId": "1",
                "title": "Lifetimes",
                "content": "Annotations and elision",
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(app.backend.requests_to("POST", "/api/lessons").is_empty());
}

#[tokio::test]
async fn lesson_payloads_forward_with_their_field_names() {
    let app = spawn_app().await;
    let cookie = app.login_as("3", "teacher").await;

    let payload = json!({
        "topicId": "1",
        "title": "Lifetimes",
        "content": "Annotations and elision",
    });
    let response = app
        .request("POST", "/api/lessons", Some(&cookie), Some(payload.clone()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let forwarded = app.backend.requests_to("POST", "/api/lessons");
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].body, Some(payload));
}

#[tokio::test]
async fn assessments_forward_opaque_question_content() {
    let app = spawn_app().await;
    let cookie = app.login_as("3", "teacher").await;

    let payload = json!({
        "lessonId": "4",
        "title": "Quiz 1",
        "questions": [{ "prompt": "What does `?` do?", "options": ["a", "b"] }],
    });
    let response = app
        .request(
            "POST",
            "/api/assessments",
            Some(&cookie),
            Some(payload.clone()),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let forwarded = app.backend.requests_to("POST", "/api/assessments");
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].body, Some(payload));
}
