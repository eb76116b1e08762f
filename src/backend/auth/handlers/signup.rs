/**
 * Signup Handler
 *
 * `PUT /auth/signup` registers a new account.
 *
 * # Registration Process
 *
 * 1. Validate email, name and password (all violations reported together)
 * 2. Check that the email is not registered yet
 * 3. Hash the password with bcrypt
 * 4. Store the user with the default status and no posts
 *
 * No token is issued; the client logs in afterwards.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;

use crate::backend::auth::handlers::types::{SignupRequest, SignupResponse};
use crate::backend::auth::users::{AccountService, NewAccount};
use crate::backend::error::BackendResult;

/// Sign up handler
///
/// # Errors
///
/// * `422 Unprocessable Entity` - invalid email, short password or empty name
/// * `409 Conflict` - the email is already registered
///
/// # Example Request
///
/// ```http
/// PUT /auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "a@x.com", "name": "Ada", "password": "secret"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"message": "User created!", "userId": "123e4567-e89b-12d3-a456-426614174000"}
/// ```
pub async fn signup(
    State(accounts): State<Arc<AccountService>>,
    Json(request): Json<SignupRequest>,
) -> BackendResult<(StatusCode, Json<SignupResponse>)> {
    tracing::info!("Signup request for email: {}", request.email);

    let user = accounts
        .signup(NewAccount {
            email: request.email,
            name: request.name,
            password: request.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created!".to_string(),
            user_id: user.id,
        }),
    ))
}
