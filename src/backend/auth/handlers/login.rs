/**
 * Login Handler
 *
 * `POST /auth/login` exchanges credentials for an identity token.
 *
 * Both an unknown email and a wrong password answer 401; the token in a
 * successful response expires after one hour.
 */

use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::users::AccountService;
use crate::backend::error::BackendResult;

/// Login handler
///
/// # Example Request
///
/// ```http
/// POST /auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "a@x.com", "password": "secret"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "userId": "..."}
/// ```
pub async fn login(
    State(accounts): State<Arc<AccountService>>,
    Json(request): Json<LoginRequest>,
) -> BackendResult<Json<LoginResponse>> {
    tracing::info!("Login request for email: {}", request.email);

    let auth = accounts.login(&request.email, &request.password).await?;
    Ok(Json(LoginResponse {
        token: auth.token,
        user_id: auth.user_id,
    }))
}
