/**
 * Error Conversion
 *
 * This module renders backend errors for the two client surfaces.
 *
 * # HTTP Response Format
 *
 * ```json
 * {
 *   "message": "Validation failed, entered data is incorrect.",
 *   "status": 422,
 *   "data": [{"field": "title", "message": "Title is invalid."}]
 * }
 * ```
 *
 * `data` is `null` for every error that is not `InvalidInput`.
 *
 * # GraphQL Format
 *
 * The same information is attached to the GraphQL error's `extensions` as
 * `code` and `data`.
 */

use async_graphql::{ErrorExtensions, Value as GraphQLValue};
use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl BackendError {
    /// JSON body used for HTTP error responses
    pub fn to_body(&self) -> serde_json::Value {
        let data = if self.violations().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::to_value(self.violations()).unwrap_or(serde_json::Value::Null)
        };

        serde_json::json!({
            "message": self.message(),
            "status": self.status_code().as_u16(),
            "data": data,
        })
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self.message());
        }
        (status, Json(self.to_body())).into_response()
    }
}

impl ErrorExtensions for BackendError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.status_code().as_u16();
        let data = serde_json::to_value(self.violations())
            .ok()
            .filter(|_| !self.violations().is_empty())
            .and_then(|json| GraphQLValue::from_json(json).ok());

        async_graphql::Error::new(self.message()).extend_with(|_, extensions| {
            extensions.set("code", code);
            if let Some(data) = data {
                extensions.set("data", data);
            }
        })
    }
}
