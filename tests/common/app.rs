//! In-process test application
//!
//! Builds the real router over a fresh [`MemoryStore`] and a temporary image
//! directory, then drives it with `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use feedhub::backend::routes::create_router;
use feedhub::backend::server::{build_state, AppState, ServerConfig};
use feedhub::backend::store::MemoryStore;

use crate::common::multipart::MultipartBody;

/// Decoded response of a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    /// JSON body, a JSON string for non-JSON bodies, `null` when empty
    pub body: Value,
}

/// Router plus the state behind it
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub images: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let images = tempfile::tempdir().expect("Failed to create image directory");
        let config = ServerConfig {
            image_dir: images.path().to_path_buf(),
            bcrypt_cost: 4,
            jwt_secret: "integration-test-secret".to_string(),
            ..ServerConfig::default()
        };

        let state = build_state(&config, Arc::new(MemoryStore::new()));
        let router = create_router(state.clone());

        Self {
            router,
            state,
            images,
        }
    }

    /// Send a raw request through the router
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse { status, body }
    }

    /// Send a JSON body
    pub async fn json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> TestResponse {
        let request = authorized(Request::builder().method(method).uri(uri), token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request");
        self.send(request).await
    }

    /// Send a request without a body
    pub async fn empty(&self, method: Method, uri: &str, token: Option<&str>) -> TestResponse {
        let request = authorized(Request::builder().method(method).uri(uri), token)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.empty(Method::GET, uri, token).await
    }

    /// Send a `multipart/form-data` body
    pub async fn multipart(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        form: MultipartBody,
    ) -> TestResponse {
        let request = authorized(Request::builder().method(method).uri(uri), token)
            .header(header::CONTENT_TYPE, MultipartBody::content_type())
            .body(Body::from(form.finish()))
            .expect("valid request");
        self.send(request).await
    }

    /// Post a GraphQL operation
    pub async fn graphql(
        &self,
        token: Option<&str>,
        query: &str,
        variables: Value,
    ) -> TestResponse {
        self.json(
            Method::POST,
            "/graphql",
            token,
            serde_json::json!({ "query": query, "variables": variables }),
        )
        .await
    }

    /// Number of files currently in the image directory
    pub fn stored_images(&self) -> usize {
        std::fs::read_dir(self.images.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

fn authorized(
    builder: axum::http::request::Builder,
    token: Option<&str>,
) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, auth_header(token)),
        None => builder,
    }
}

/// Value of the `Authorization` header for a token
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
