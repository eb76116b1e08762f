//! Image upload handler
//!
//! `PUT /post-image` stores one image ahead of a GraphQL create or update
//! and returns its reference. An `oldPath` field names the image it
//! replaces, which is reclaimed unless a post still references it.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::backend::error::BackendResult;
use crate::backend::feed::handlers::form::PostForm;
use crate::backend::feed::handlers::types::ImageUploadResponse;
use crate::backend::feed::images::DiskImages;
use crate::backend::feed::service::FeedService;
use crate::backend::middleware::AuthUser;

/// Store an image (PUT /post-image)
///
/// Answers 201 with `filePath` when an image was stored, and 200 with
/// "No file provided!" when the request carried no accepted image.
pub async fn store_post_image(
    State(feed): State<Arc<FeedService>>,
    State(images): State<Arc<DiskImages>>,
    AuthUser(user): AuthUser,
    mut multipart: Multipart,
) -> BackendResult<(StatusCode, Json<ImageUploadResponse>)> {
    let form = PostForm::read(&mut multipart, &images).await?;

    let Some(file_path) = form.uploaded else {
        return Ok((
            StatusCode::OK,
            Json(ImageUploadResponse {
                message: "No file provided!",
                file_path: None,
            }),
        ));
    };

    if let Some(old_path) = form.old_path.filter(|p| !p.trim().is_empty()) {
        feed.release_replaced_image(user.user_id, &old_path).await;
    }

    tracing::info!("User {} uploaded {}", user.user_id, file_path);
    Ok((
        StatusCode::CREATED,
        Json(ImageUploadResponse {
            message: "File stored.",
            file_path: Some(file_path),
        }),
    ))
}
