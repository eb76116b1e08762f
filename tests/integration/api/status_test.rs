//! User status integration tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_new_user_has_default_status() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;

    let response = app.get("/status", Some(&ada.token)).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["message"], "User status");
    assert_eq!(response.body["status"], "I am new!");
}

#[tokio::test]
async fn test_update_status() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;

    let response = app
        .json(
            Method::PUT,
            "/status",
            Some(&ada.token),
            json!({ "status": "Writing tests" }),
        )
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["message"], "Status update success");

    let current = app.get("/status", Some(&ada.token)).await;
    assert_eq!(current.body["status"], "Writing tests");
}

#[tokio::test]
async fn test_status_is_per_user() {
    let app = TestApp::new();
    let ada = create_test_user(&app, "ada@example.com", "Ada").await;
    let bob = create_test_user(&app, "bob@example.com", "Bob").await;

    app.json(
        Method::PUT,
        "/status",
        Some(&ada.token),
        json!({ "status": "Busy" }),
    )
    .await;

    let bobs = app.get("/status", Some(&bob.token)).await;
    assert_eq!(bobs.body["status"], "I am new!");
}
