//! Status handlers
//!
//! Read and replace the caller's own status line. There is no way to address
//! another user's status.

use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::backend::auth::AccountService;
use crate::backend::error::BackendResult;
use crate::backend::feed::handlers::types::{MessageResponse, StatusResponse, UpdateStatusRequest};
use crate::backend::middleware::AuthUser;

/// Read the caller's status (GET /status)
pub async fn get_status(
    State(accounts): State<Arc<AccountService>>,
    AuthUser(user): AuthUser,
) -> BackendResult<Json<StatusResponse>> {
    let status = accounts.status(user.user_id).await?;
    Ok(Json(StatusResponse {
        message: "User status",
        status,
    }))
}

/// Replace the caller's status (PUT /status)
pub async fn update_status(
    State(accounts): State<Arc<AccountService>>,
    AuthUser(user): AuthUser,
    Json(request): Json<UpdateStatusRequest>,
) -> BackendResult<Json<MessageResponse>> {
    accounts.set_status(user.user_id, request.status).await?;
    Ok(Json(MessageResponse {
        message: "Status update success",
    }))
}
