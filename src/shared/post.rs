/**
 * Post Data Structures
 *
 * This module defines the stored `Post` record and the `PostView` shape that
 * is returned to clients and pushed over the real-time channel.
 *
 * A `PostView` never carries anything about the creator beyond their id and
 * display name. Password hashes and emails stay inside `User`.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::user::User;

/// Number of posts returned per page of the feed
pub const POSTS_PER_PAGE: u32 = 2;

/// Image reference value meaning "keep the image the post already has"
pub const KEEP_CURRENT_IMAGE: &str = "unspecified";

/// A post as persisted by the store
///
/// `creator_id` is fixed at creation time. The owning user's post list is
/// kept in sync with it by `backend::feed::ownership`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post ID
    pub id: Uuid,
    /// Post title (trimmed, at least 5 characters)
    pub title: String,
    /// Post body (trimmed, at least 5 characters)
    pub content: String,
    /// Storage path of the associated image
    pub image_url: String,
    /// ID of the owning user
    pub creator_id: Uuid,
    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,
    /// Server-assigned last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Check whether `user_id` owns this post
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.creator_id == user_id
    }
}

/// Public summary of a post's creator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorSummary {
    pub id: Uuid,
    pub name: String,
}

impl From<&User> for CreatorSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}

/// Client-facing representation of a post with its creator resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub creator: CreatorSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostView {
    /// Build a view from a post and its (already loaded) creator
    ///
    /// If the creator record is missing the summary keeps the id and an
    /// empty name.
    pub fn new(post: Post, creator: Option<&User>) -> Self {
        let creator = creator
            .map(CreatorSummary::from)
            .unwrap_or_else(|| CreatorSummary {
                id: post.creator_id,
                name: String::new(),
            });

        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            image_url: post.image_url,
            creator,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// One page of the feed plus the total number of posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    pub posts: Vec<PostView>,
    pub total_items: u64,
}

/// Input for creating a post
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub image_url: String,
}

/// Input for updating a post
///
/// `image_url` set to [`KEEP_CURRENT_IMAGE`] leaves the stored image alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostInput {
    pub title: String,
    pub content: String,
    pub image_url: String,
}

impl UpdatePostInput {
    /// The image the post should end up with, or `None` to keep the current one
    pub fn requested_image(&self) -> Option<&str> {
        if self.image_url == KEEP_CURRENT_IMAGE {
            None
        } else {
            Some(self.image_url.as_str())
        }
    }
}
