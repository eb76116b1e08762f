//! Store Module
//!
//! The document-store facade the feed relies on. The backend only ever talks
//! to the `FeedStore` trait; two adapters implement it:
//!
//! - **`memory`** - process-local maps, used when no database is configured
//!   and by the test-suite
//! - **`postgres`** - `sqlx` adapter with embedded migrations
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - FeedStore port and StoreError
//! ├── memory.rs   - In-memory adapter
//! └── postgres.rs - PostgreSQL adapter
//! ```
//!
//! The store offers no multi-record transactions. Keeping a post and its
//! owner's post list consistent is the job of `backend::feed::ownership`.
//! User records are never written back whole after creation: the post list
//! and the status each have their own single-column write.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::{Post, User};

/// In-memory adapter
pub mod memory;

/// PostgreSQL adapter
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated (duplicate email)
    #[error("{0}")]
    Conflict(String),

    /// Any other backend failure
    #[error("store backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Window into the post collection, newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostQuery {
    /// Number of posts to skip
    pub skip: u64,
    /// Maximum number of posts to return
    pub limit: u64,
}

impl PostQuery {
    /// Query for a 1-based page of `per_page` posts
    pub fn page(page: u32, per_page: u32) -> Self {
        let page = u64::from(page.max(1));
        let per_page = u64::from(per_page);
        Self {
            skip: (page - 1) * per_page,
            limit: per_page,
        }
    }
}

/// Port for user and post persistence
#[async_trait]
pub trait FeedStore: Send + Sync {
    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Insert a new user
    ///
    /// Fails with [`StoreError::Conflict`] when the email is taken.
    async fn insert_user(&self, user: &User) -> StoreResult<()>;

    /// Append `post_id` to the user's post list unless it is already there
    ///
    /// Returns `false` when the user does not exist. Only the post list is
    /// written, so concurrent calls for the same user never drop an entry.
    async fn attach_post(&self, user_id: Uuid, post_id: Uuid) -> StoreResult<bool>;

    /// Remove `post_id` from the user's post list
    ///
    /// Returns `false` when the user does not exist.
    async fn detach_post(&self, user_id: Uuid, post_id: Uuid) -> StoreResult<bool>;

    /// Overwrite the user's status, leaving every other column alone
    async fn set_status(&self, user_id: Uuid, status: &str) -> StoreResult<Option<User>>;

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>>;

    /// Posts ordered by creation time, most recent first
    async fn find_posts(&self, query: PostQuery) -> StoreResult<Vec<Post>>;

    /// Every post whose image reference equals `image_url`
    async fn find_posts_by_image(&self, image_url: &str) -> StoreResult<Vec<Post>>;

    async fn count_posts(&self) -> StoreResult<u64>;

    /// Insert or overwrite a post
    async fn save_post(&self, post: &Post) -> StoreResult<()>;

    /// Remove a post, returning whether it existed
    async fn delete_post(&self, id: Uuid) -> StoreResult<bool>;
}
