/**
 * In-memory Store
 *
 * A `FeedStore` backed by hash maps behind a `tokio::sync::RwLock`. Used when
 * `DATABASE_URL` is not set and throughout the tests. Data lives only as long
 * as the process.
 */

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::store::{FeedStore, PostQuery, StoreError, StoreResult};
use crate::shared::{Post, User};

#[derive(Default)]
struct Collections {
    users: HashMap<Uuid, User>,
    posts: HashMap<Uuid, Post>,
}

/// Process-local store
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedStore for MemoryStore {
    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, user: &User) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if inner.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict("User already exists!".to_string()));
        }
        inner.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn attach_post(&self, user_id: Uuid, post_id: Uuid) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.users.get_mut(&user_id) {
            Some(user) => {
                user.attach_post(post_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn detach_post(&self, user_id: Uuid, post_id: Uuid) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.users.get_mut(&user_id) {
            Some(user) => {
                user.detach_post(post_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_status(&self, user_id: Uuid, status: &str) -> StoreResult<Option<User>> {
        let mut inner = self.inner.write().await;
        Ok(inner.users.get_mut(&user_id).map(|user| {
            user.status = status.to_string();
            user.clone()
        }))
    }

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>> {
        Ok(self.inner.read().await.posts.get(&id).cloned())
    }

    async fn find_posts(&self, query: PostQuery) -> StoreResult<Vec<Post>> {
        let inner = self.inner.read().await;
        let mut posts: Vec<&Post> = inner.posts.values().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let skip = usize::try_from(query.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit).unwrap_or(usize::MAX);
        Ok(posts.into_iter().skip(skip).take(limit).cloned().collect())
    }

    async fn find_posts_by_image(&self, image_url: &str) -> StoreResult<Vec<Post>> {
        let inner = self.inner.read().await;
        Ok(inner
            .posts
            .values()
            .filter(|p| p.image_url == image_url)
            .cloned()
            .collect())
    }

    async fn count_posts(&self) -> StoreResult<u64> {
        Ok(self.inner.read().await.posts.len() as u64)
    }

    async fn save_post(&self, post: &Post) -> StoreResult<()> {
        self.inner.write().await.posts.insert(post.id, post.clone());
        Ok(())
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.inner.write().await.posts.remove(&id).is_some())
    }
}
