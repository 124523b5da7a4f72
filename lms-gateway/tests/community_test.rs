mod common;

use axum::http::StatusCode;
use common::{response_json, spawn_app};
use serde_json::json;

#[tokio::test]
async fn author_can_update_own_post() {
    let app = spawn_app().await;
    let cookie = app.login_as("10", "student").await;

    app.backend.stub(
        "GET",
        "/api/community/posts/5",
        200,
        json!({ "id": "5", "author_id": "10", "title": "Old title" }),
    );

    let response = app
        .request(
            "PUT",
            "/api/community/posts/5",
            Some(&cookie),
            Some(json!({ "content": "Updated content" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let forwarded = app.backend.requests_to("PUT", "/api/community/posts/5");
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].body, Some(json!({ "content": "Updated content" })));
}

#[tokio::test]
async fn non_author_cannot_update_post() {
    let app = spawn_app().await;
    let cookie = app.login_as("10", "student").await;

    app.backend.stub(
        "GET",
        "/api/community/posts/5",
        200,
        json!({ "id": "5", "author_id": "11" }),
    );

    let response = app
        .request(
            "PUT",
            "/api/community/posts/5",
            Some(&cookie),
            Some(json!({ "content": "Hijacked" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(app
        .backend
        .requests_to("PUT", "/api/community/posts/5")
        .is_empty());
}

#[tokio::test]
async fn admin_can_delete_any_post() {
    let app = spawn_app().await;
    let cookie = app.login_as("1", "admin").await;

    app.backend.stub(
        "GET",
        "/api/community/posts/5",
        200,
        json!({ "id": "5", "author_id": "99" }),
    );

    let response = app
        .request("DELETE", "/api/community/posts/5", Some(&cookie), None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        app.backend
            .requests_to("DELETE", "/api/community/posts/5")
            .len(),
        1
    );
}

#[tokio::test]
async fn missing_post_propagates_not_found() {
    let app = spawn_app().await;
    let cookie = app.login_as("10", "student").await;

    app.backend.stub(
        "GET",
        "/api/community/posts/404",
        404,
        json!({ "error": "Post not found" }),
    );

    let response = app
        .request(
            "PUT",
            "/api/community/posts/404",
            Some(&cookie),
            Some(json!({ "content": "x" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Post not found");
}

#[tokio::test]
async fn oversized_post_title_is_rejected() {
    let app = spawn_app().await;
    let cookie = app.login_as("10", "student").await;

    let response = app
        .request(
            "POST",
            "/api/community/posts",
            Some(&cookie),
            Some(json!({ "title": "x".repeat(256), "content": "body" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Title must be at most 255 characters");
    assert!(app
        .backend
        .requests_to("POST", "/api/community/posts")
        .is_empty());
}

#[tokio::test]
async fn blank_post_content_is_rejected() {
    let app = spawn_app().await;
    let cookie = app.login_as("10", "student").await;

    let response = app
        .request(
            "POST",
            "/api/community/posts",
            Some(&cookie),
            Some(json!({ "title": "Valid", "content": "   " })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app
        .backend
        .requests_to("POST", "/api/community/posts")
        .is_empty());
}

#[tokio::test]
async fn replies_require_a_session() {
    let app = spawn_app().await;

    let response = app
        .request(
            "POST",
            "/api/community/posts/5/replies",
            None,
            Some(json!({ "content": "anonymous reply" })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn author_can_delete_own_reply() {
    let app = spawn_app().await;
    let cookie = app.login_as("10", "student").await;

    app.backend.stub(
        "GET",
        "/api/community/replies/3",
        200,
        json!({ "id": "3", "post_id": "5", "author_id": "10" }),
    );

    let response = app
        .request("DELETE", "/api/community/replies/3", Some(&cookie), None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        app.backend
            .requests_to("DELETE", "/api/community/replies/3")
            .len(),
        1
    );
}

#[tokio::test]
async fn non_author_cannot_delete_reply() {
    let app = spawn_app().await;
    let cookie = app.login_as("10", "student").await;

    app.backend.stub(
        "GET",
        "/api/community/replies/3",
        200,
        json!({ "id": "3", "post_id": "5", "author_id": "11" }),
    );

    let response = app
        .request("DELETE", "/api/community/replies/3", Some(&cookie), None)
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(app
        .backend
        .requests_to("DELETE", "/api/community/replies/3")
        .is_empty());
}
