//! Authentication API integration tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_signup_creates_user() {
    let app = TestApp::new();

    let response = app
        .json(
            Method::PUT,
            "/auth/signup",
            None,
            json!({ "email": "ada@example.com", "name": "Ada", "password": "secret" }),
        )
        .await;

    assert_status!(response, StatusCode::CREATED);
    assert_eq!(response.body["message"], "User created!");
    parse_id(&response.body["userId"]);
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    let app = TestApp::new();
    signup(&app, "ada@example.com", "Ada").await;

    let response = app
        .json(
            Method::PUT,
            "/auth/signup",
            None,
            json!({ "email": "ada@example.com", "name": "Other", "password": "secret" }),
        )
        .await;

    assert_status!(response, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "User already exists!");
}

#[tokio::test]
async fn test_signup_reports_all_violations() {
    let app = TestApp::new();

    let response = app
        .json(
            Method::PUT,
            "/auth/signup",
            None,
            json!({ "email": "not-an-email", "name": "", "password": "abc" }),
        )
        .await;

    assert_status!(response, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> = response.body["data"]
        .as_array()
        .expect("violations listed")
        .iter()
        .filter_map(|v| v["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["email", "password", "name"]);
}

#[tokio::test]
async fn test_login_returns_token_for_user() {
    let app = TestApp::new();
    let user_id = signup(&app, "ada@example.com", "Ada").await;

    let response = app
        .json(
            Method::POST,
            "/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": TEST_PASSWORD }),
        )
        .await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(parse_id(&response.body["userId"]), user_id);

    let token = response.body["token"].as_str().expect("token present");
    let identity = assert_ok!(app.state.tokens.verify_token(token));
    assert_eq!(identity.user_id, user_id);
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthenticated() {
    let app = TestApp::new();
    signup(&app, "ada@example.com", "Ada").await;

    let response = app
        .json(
            Method::POST,
            "/auth/login",
            None,
            json!({ "email": "ada@example.com", "password": "not-the-password" }),
        )
        .await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Wrong password!");
}

#[tokio::test]
async fn test_login_unknown_email_is_unauthenticated() {
    let app = TestApp::new();

    let response = app
        .json(
            Method::POST,
            "/auth/login",
            None,
            json!({ "email": "nobody@example.com", "password": TEST_PASSWORD }),
        )
        .await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::new();

    let response = app.get("/feed/posts", None).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Not authenticated.");
}

#[tokio::test]
async fn test_protected_route_rejects_forged_token() {
    let app = TestApp::new();

    let response = app.get("/feed/posts", Some("forged.token.value")).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/nothing/here", None).await;
    assert_status!(response, StatusCode::NOT_FOUND);
}
