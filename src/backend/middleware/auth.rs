/**
 * Authentication Middleware
 *
 * This module protects routes that require an identity. It extracts the
 * bearer token from the `Authorization` header, verifies it and attaches the
 * authenticated user to the request extensions.
 *
 * A missing header is a hard stop (401), never an anonymous fallback. An
 * invalid or expired token is also a 401. Only the identity is attached;
 * ownership checks happen later, per resource.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from the identity token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Verify the bearer credential carried by `headers`
pub fn authenticate(
    headers: &HeaderMap,
    tokens: &TokenService,
) -> BackendResult<AuthenticatedUser> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthenticated("Not authenticated.")
        })?
        .to_str()
        .map_err(|_| BackendError::unauthenticated("Not authenticated."))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::unauthenticated("Not authenticated.")
        })?;

    let identity = tokens.verify_token(token)?;
    Ok(AuthenticatedUser {
        user_id: identity.user_id,
        email: identity.email,
    })
}

/// Authentication middleware
///
/// Rejects the request with 401 unless it carries a valid bearer token.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(request.headers(), &app_state.tokens)?;
    tracing::debug!("Authenticated request from user {}", user.user_id);

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only usable on routes behind [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthenticated("Not authenticated.")
            })
    }
}
