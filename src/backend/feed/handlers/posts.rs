/**
 * Post Handlers
 *
 * REST endpoints for the feed. Every route here sits behind the
 * authentication middleware, so each handler starts with a verified
 * identity.
 *
 * - `GET /feed/posts?page=N` - one page of posts, newest first
 * - `POST /feed/post` - create (multipart)
 * - `GET /feed/post/{postId}` - one post
 * - `PUT /feed/post/{postId}` - update (multipart)
 * - `DELETE /feed/post/{postId}` - delete
 */

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::feed::handlers::form::PostForm;
use crate::backend::feed::handlers::types::{
    CreatePostResponse, MessageResponse, PostResponse, PostsQuery, PostsResponse,
};
use crate::backend::feed::images::DiskImages;
use crate::backend::feed::FeedService;
use crate::backend::middleware::AuthUser;
use crate::shared::{CreatePostInput, UpdatePostInput};

/// Parse a post id from the path
///
/// A malformed id cannot name an existing post, so it is a 404.
pub fn parse_post_id(raw: &str) -> BackendResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::warn!("Malformed post id: {}", raw);
        BackendError::not_found("Could not find post.")
    })
}

/// List posts (GET /feed/posts)
pub async fn list_posts(
    State(feed): State<Arc<FeedService>>,
    AuthUser(_user): AuthUser,
    Query(query): Query<PostsQuery>,
) -> BackendResult<Json<PostsResponse>> {
    let page = feed.list_posts(query.page.unwrap_or(1)).await?;
    Ok(Json(PostsResponse {
        message: "Fetched posts successfully.",
        posts: page.posts,
        total_items: page.total_items,
    }))
}

/// Create a post (POST /feed/post)
///
/// # Errors
///
/// * `422 Unprocessable Entity` - short title or content, or no accepted image
pub async fn create_post(
    State(feed): State<Arc<FeedService>>,
    State(images): State<Arc<DiskImages>>,
    AuthUser(user): AuthUser,
    mut multipart: Multipart,
) -> BackendResult<(StatusCode, Json<CreatePostResponse>)> {
    let form = PostForm::read(&mut multipart, &images).await?;
    let input = CreatePostInput {
        title: form.title.clone(),
        content: form.content.clone(),
        image_url: form.uploaded.clone().unwrap_or_default(),
    };

    match feed.create_post(user.user_id, input).await {
        Ok(post) => Ok((
            StatusCode::CREATED,
            Json(CreatePostResponse {
                message: "Post created successfully!",
                creator: post.creator.clone(),
                post,
            }),
        )),
        Err(e) => {
            form.discard_upload(images.as_ref());
            Err(e)
        }
    }
}

/// Fetch one post (GET /feed/post/{postId})
pub async fn get_post(
    State(feed): State<Arc<FeedService>>,
    AuthUser(_user): AuthUser,
    Path(post_id): Path<String>,
) -> BackendResult<Json<PostResponse>> {
    let post = feed.get_post(parse_post_id(&post_id)?).await?;
    Ok(Json(PostResponse {
        message: "Post fetched.",
        post,
    }))
}

/// Update a post (PUT /feed/post/{postId})
///
/// # Errors
///
/// * `422 Unprocessable Entity` - short title or content, or no image at all
/// * `404 Not Found` - no such post
/// * `403 Forbidden` - the post belongs to someone else
pub async fn update_post(
    State(feed): State<Arc<FeedService>>,
    State(images): State<Arc<DiskImages>>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<String>,
    mut multipart: Multipart,
) -> BackendResult<Json<PostResponse>> {
    let form = PostForm::read(&mut multipart, &images).await?;
    let result = match parse_post_id(&post_id) {
        Ok(post_id) => {
            let input = UpdatePostInput {
                title: form.title.clone(),
                content: form.content.clone(),
                image_url: form.image_url(),
            };
            feed.update_post(user.user_id, post_id, input).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(post) => Ok(Json(PostResponse {
            message: "Post updated!",
            post,
        })),
        Err(e) => {
            form.discard_upload(images.as_ref());
            Err(e)
        }
    }
}

/// Delete a post (DELETE /feed/post/{postId})
pub async fn delete_post(
    State(feed): State<Arc<FeedService>>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<String>,
) -> BackendResult<Json<MessageResponse>> {
    feed.delete_post(user.user_id, parse_post_id(&post_id)?).await?;
    Ok(Json(MessageResponse {
        message: "Deleted post.",
    }))
}
