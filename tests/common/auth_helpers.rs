//! Authentication test helpers

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::app::TestApp;
use crate::common::multipart::MultipartBody;

pub const TEST_PASSWORD: &str = "secret";

/// A registered and logged-in user
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub token: String,
}

/// Register an account through `PUT /auth/signup`
pub async fn signup(app: &TestApp, email: &str, name: &str) -> Uuid {
    let response = app
        .json(
            Method::PUT,
            "/auth/signup",
            None,
            json!({ "email": email, "name": name, "password": TEST_PASSWORD }),
        )
        .await;
    assert_status!(response, StatusCode::CREATED);
    parse_id(&response.body["userId"])
}

/// Log in through `POST /auth/login` and return the token
pub async fn login(app: &TestApp, email: &str) -> String {
    let response = app
        .json(
            Method::POST,
            "/auth/login",
            None,
            json!({ "email": email, "password": TEST_PASSWORD }),
        )
        .await;
    assert_status!(response, StatusCode::OK);
    response.body["token"]
        .as_str()
        .expect("login returns a token")
        .to_string()
}

/// Sign up and log in
pub async fn create_test_user(app: &TestApp, email: &str, name: &str) -> TestUser {
    let id = signup(app, email, name).await;
    let token = login(app, email).await;
    TestUser {
        id,
        name: name.to_string(),
        token,
    }
}

/// Create a post with an uploaded PNG and return the post JSON
pub async fn create_test_post(app: &TestApp, user: &TestUser, title: &str) -> Value {
    let form = MultipartBody::new()
        .text("title", title)
        .text("content", "Some content for the post")
        .png("photo.png");

    let response = app
        .multipart(Method::POST, "/feed/post", Some(&user.token), form)
        .await;
    assert_status!(response, StatusCode::CREATED);
    response.body["post"].clone()
}

pub fn parse_id(value: &Value) -> Uuid {
    value
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .unwrap_or_else(|| panic!("expected a UUID, got {}", value))
}
