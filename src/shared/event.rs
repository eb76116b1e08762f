/**
 * Real-time Feed Events
 *
 * This module defines the events pushed to every connected client whenever a
 * post is created, updated or deleted. Events exist only on the wire; they
 * are never persisted.
 *
 * # Wire Format
 *
 * ```json
 * {"action": "create", "post": {...}}
 * {"action": "update", "post": {...}}
 * {"action": "delete", "postId": "..."}
 * ```
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::post::PostView;

/// Name of the real-time channel the events are published on
pub const FEED_CHANNEL: &str = "posts";

/// Kind of change carried by a [`FeedEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedAction {
    Create,
    Update,
    Delete,
}

/// A post mutation as seen by subscribers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FeedEvent {
    /// A new post was created
    Create { post: PostView },
    /// An existing post was changed
    Update { post: PostView },
    /// A post was removed
    Delete {
        #[serde(rename = "postId")]
        post_id: Uuid,
    },
}

impl FeedEvent {
    /// The action this event describes
    pub fn action(&self) -> FeedAction {
        match self {
            Self::Create { .. } => FeedAction::Create,
            Self::Update { .. } => FeedAction::Update,
            Self::Delete { .. } => FeedAction::Delete,
        }
    }

    /// ID of the post the event is about
    pub fn post_id(&self) -> Uuid {
        match self {
            Self::Create { post } | Self::Update { post } => post.id,
            Self::Delete { post_id } => *post_id,
        }
    }
}
