/**
 * Feed Mutations
 *
 * Create, update and delete of posts. Every mutation follows the same order:
 *
 * 1. Validate the input (before any store access)
 * 2. Load the target post (`NotFound` if absent)
 * 3. Check ownership (`Forbidden`), only once existence is established
 * 4. Load whatever the response needs, so nothing can fail after the write
 * 5. Apply the change, keeping post and owner in sync
 * 6. Reclaim images no post references any more, only after the change is saved
 * 7. Publish the event to the notification hub
 *
 * Steps 6 and 7 are best-effort and never fail the mutation.
 */

use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::feed::service::FeedService;
use crate::backend::feed::{ownership, validation};
use crate::shared::{CreatePostInput, FeedEvent, Post, PostView, UpdatePostInput, User};

impl FeedService {
    /// Create a post owned by `actor_id`
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - short title or content, no image, or an image
    ///   another post already uses
    /// * `Unauthenticated` - the actor no longer exists
    pub async fn create_post(
        &self,
        actor_id: Uuid,
        input: CreatePostInput,
    ) -> BackendResult<PostView> {
        validation::validate_create(&input)?;
        let creator = self.load_actor(actor_id).await?;

        let now = self.clock.now();
        let post = Post {
            id: Uuid::new_v4(),
            title: input.title.trim().to_string(),
            content: input.content.trim().to_string(),
            image_url: input.image_url.trim().to_string(),
            creator_id: creator.id,
            created_at: now,
            updated_at: now,
        };
        self.ensure_unclaimed(&post.image_url, post.id).await?;

        ownership::link(self.store.as_ref(), &post).await?;
        tracing::info!("Post {} created by user {}", post.id, actor_id);

        let view = PostView::new(post, Some(&creator));
        self.hub.publish(FeedEvent::Create { post: view.clone() });
        Ok(view)
    }

    /// Update a post owned by `actor_id`
    ///
    /// An image of `unspecified` keeps the stored image. Any other value that
    /// differs from the stored one replaces it, and the old file is reclaimed
    /// after the new state is saved.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - short title or content, an empty image, or an image
    ///   another post already uses
    /// * `NotFound` - no such post
    /// * `Forbidden` - the post belongs to someone else
    pub async fn update_post(
        &self,
        actor_id: Uuid,
        post_id: Uuid,
        input: UpdatePostInput,
    ) -> BackendResult<PostView> {
        validation::validate_update(&input)?;
        let mut post = self.find_existing(post_id).await?;
        ensure_owner(&post, actor_id)?;

        let previous_image = post.image_url.clone();
        if let Some(image_url) = input.requested_image() {
            post.image_url = image_url.trim().to_string();
        }
        if post.image_url != previous_image {
            self.ensure_unclaimed(&post.image_url, post.id).await?;
        }
        let creator = self.store.find_user(post.creator_id).await?;

        post.title = input.title.trim().to_string();
        post.content = input.content.trim().to_string();
        post.updated_at = self.clock.now().max(post.created_at);

        self.store.save_post(&post).await?;
        tracing::info!("Post {} updated by user {}", post.id, actor_id);

        if post.image_url != previous_image {
            self.release_image(&previous_image).await;
        }

        let view = PostView::new(post, creator.as_ref());
        self.hub.publish(FeedEvent::Update { post: view.clone() });
        Ok(view)
    }

    /// Delete a post owned by `actor_id`
    ///
    /// # Errors
    ///
    /// * `NotFound` - no such post
    /// * `Forbidden` - the post belongs to someone else
    pub async fn delete_post(&self, actor_id: Uuid, post_id: Uuid) -> BackendResult<()> {
        let post = self.find_existing(post_id).await?;
        ensure_owner(&post, actor_id)?;

        ownership::unlink(self.store.as_ref(), &post).await?;
        tracing::info!("Post {} deleted by user {}", post.id, actor_id);

        self.release_image(&post.image_url).await;
        self.hub.publish(FeedEvent::Delete { post_id: post.id });
        Ok(())
    }

    async fn load_actor(&self, actor_id: Uuid) -> BackendResult<User> {
        self.store.find_user(actor_id).await?.ok_or_else(|| {
            tracing::warn!("Mutation by unknown user: {}", actor_id);
            BackendError::unauthenticated("Invalid user.")
        })
    }
}

fn ensure_owner(post: &Post, actor_id: Uuid) -> BackendResult<()> {
    if post.is_owned_by(actor_id) {
        Ok(())
    } else {
        tracing::warn!("User {} is not the owner of post {}", actor_id, post.id);
        Err(BackendError::forbidden("Not authorized!"))
    }
}
