//! Feed reads
//!
//! Any authenticated caller may read any post; the identity check happens at
//! the transport boundary.

use std::collections::HashMap;
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::feed::service::FeedService;
use crate::backend::store::PostQuery;
use crate::shared::post::POSTS_PER_PAGE;
use crate::shared::{Post, PostPage, PostView, User};

impl FeedService {
    /// One page of the feed, most recent first
    ///
    /// Pages are 1-based; page 0 is treated as page 1. A page past the end is
    /// empty but still reports the total.
    pub async fn list_posts(&self, page: u32) -> BackendResult<PostPage> {
        let query = PostQuery::page(page, POSTS_PER_PAGE);
        let total_items = self.store.count_posts().await?;
        let posts = self.store.find_posts(query).await?;
        let posts = self.with_creators(posts).await?;

        tracing::debug!(
            "Fetched page {} ({} posts of {})",
            page.max(1),
            posts.len(),
            total_items
        );
        Ok(PostPage { posts, total_items })
    }

    /// A single post by id
    pub async fn get_post(&self, post_id: Uuid) -> BackendResult<PostView> {
        let post = self.find_existing(post_id).await?;
        let creator = self.store.find_user(post.creator_id).await?;
        Ok(PostView::new(post, creator.as_ref()))
    }

    pub(super) async fn find_existing(&self, post_id: Uuid) -> BackendResult<Post> {
        self.store.find_post(post_id).await?.ok_or_else(|| {
            tracing::warn!("Post not found: {}", post_id);
            BackendError::not_found("Could not find post.")
        })
    }

    async fn with_creators(&self, posts: Vec<Post>) -> BackendResult<Vec<PostView>> {
        let mut creators: HashMap<Uuid, Option<User>> = HashMap::new();
        for post in &posts {
            if !creators.contains_key(&post.creator_id) {
                let user = self.store.find_user(post.creator_id).await?;
                creators.insert(post.creator_id, user);
            }
        }

        Ok(posts
            .into_iter()
            .map(|post| {
                let creator = creators.get(&post.creator_id).and_then(Option::as_ref);
                PostView::new(post, creator)
            })
            .collect())
    }
}
