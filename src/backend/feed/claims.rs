//! Image claims
//!
//! An image reference belongs to the post that uses it. No post may take over
//! a reference another post already holds, and a file is only reclaimed once
//! no post references it any more. Fresh uploads that no post references yet
//! are unclaimed.

use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::feed::service::FeedService;
use crate::backend::feed::validation::VALIDATION_FAILED;
use crate::shared::Violation;

/// Violation reported when the requested image belongs to another post
pub const IMAGE_IN_USE: &str = "Image is already in use.";

impl FeedService {
    /// Fail when a post other than `post_id` already uses `image_url`
    pub(super) async fn ensure_unclaimed(
        &self,
        image_url: &str,
        post_id: Uuid,
    ) -> BackendResult<()> {
        let holders = self.store.find_posts_by_image(image_url).await?;
        match holders.iter().find(|p| p.id != post_id) {
            Some(holder) => {
                tracing::warn!("Image {} is already used by post {}", image_url, holder.id);
                Err(BackendError::invalid_input(
                    VALIDATION_FAILED,
                    vec![Violation::new("image", IMAGE_IN_USE)],
                ))
            }
            None => Ok(()),
        }
    }

    /// Reclaim `image_url` unless some post still references it
    ///
    /// Best-effort: a failed lookup keeps the file and is logged.
    pub(super) async fn release_image(&self, image_url: &str) -> bool {
        match self.store.find_posts_by_image(image_url).await {
            Ok(holders) if holders.is_empty() => {
                self.images.schedule_delete(image_url);
                true
            }
            Ok(holders) => {
                tracing::info!("Keeping image {} used by {} post(s)", image_url, holders.len());
                false
            }
            Err(e) => {
                tracing::warn!("Keeping image {}, claim lookup failed: {}", image_url, e);
                false
            }
        }
    }

    /// Reclaim an image a client reports as replaced by a new upload
    ///
    /// Images a post still references are left alone; the update or delete
    /// that drops the reference reclaims them.
    pub async fn release_replaced_image(&self, actor_id: Uuid, image_url: &str) -> bool {
        let released = self.release_image(image_url).await;
        if !released {
            tracing::warn!("User {} asked to reclaim image {}, kept", actor_id, image_url);
        }
        released
    }
}
