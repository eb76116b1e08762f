//! Request and response bodies of the feed endpoints

use serde::{Deserialize, Serialize};

use crate::shared::{CreatorSummary, PostView};

/// `?page=N` on the listing endpoint
#[derive(Debug, Default, Deserialize)]
pub struct PostsQuery {
    pub page: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsResponse {
    pub message: &'static str,
    pub posts: Vec<PostView>,
    pub total_items: u64,
}

#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub message: &'static str,
    pub post: PostView,
    pub creator: CreatorSummary,
}

/// Response carrying a single post
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub message: &'static str,
    pub post: PostView,
}

/// Response with nothing but a message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}
