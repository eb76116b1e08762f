//! Post ownership
//!
//! A post names its creator and the creator's record lists the post. The
//! store has no transactions, so these two functions are the only places
//! either side is written together. Nothing else attaches or detaches posts.
//!
//! The owner's list is changed with single-entry store writes
//! (`attach_post`, `detach_post`), never by saving a loaded user back, so
//! concurrent mutations for the same owner cannot overwrite each other.

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::store::FeedStore;
use crate::shared::Post;

/// Persist a new post and append it to its creator's post list
///
/// If the creator's list cannot be updated the post is removed again, so a
/// failed call never leaves a post without an owner link.
pub async fn link(store: &dyn FeedStore, post: &Post) -> BackendResult<()> {
    store.save_post(post).await?;

    let failure = match store.attach_post(post.creator_id, post.id).await {
        Ok(true) => return Ok(()),
        Ok(false) => BackendError::internal(format!(
            "owner {} of post {} does not exist",
            post.creator_id, post.id
        )),
        Err(e) => e.into(),
    };

    if let Err(rollback) = store.delete_post(post.id).await {
        tracing::error!("Failed to roll back post {}: {}", post.id, rollback);
    }
    Err(failure)
}

/// Remove a post and drop it from its owner's post list
///
/// A missing owner record is logged; the post is still removed.
pub async fn unlink(store: &dyn FeedStore, post: &Post) -> BackendResult<()> {
    if !store.delete_post(post.id).await? {
        return Err(BackendError::not_found("Could not find post."));
    }

    if !store.detach_post(post.creator_id, post.id).await? {
        tracing::warn!("Owner {} of deleted post {} not found", post.creator_id, post.id);
    }

    Ok(())
}
