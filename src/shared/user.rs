/**
 * User Data Structure
 *
 * A registered user, their free-text status and the ordered list of posts
 * they own. The post list can only be changed from inside the crate, through
 * `backend::feed::ownership`, so the two views of ownership (post → creator
 * and user → posts) are always updated together.
 */
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Status every new account starts with
pub const DEFAULT_STATUS: &str = "I am new!";

/// User struct representing a stored account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Normalised (lower-case) email address, unique across users
    pub email: String,
    /// Display name
    pub name: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Free-text status line
    pub status: String,
    /// Owned post IDs in insertion order, without duplicates
    posts: Vec<Uuid>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh account with the default status and no posts
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            status: DEFAULT_STATUS.to_string(),
            posts: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Rebuild a user from stored columns
    pub fn from_parts(
        id: Uuid,
        email: String,
        name: String,
        password_hash: String,
        status: String,
        posts: Vec<Uuid>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut user = Self {
            id,
            email,
            name,
            password_hash,
            status,
            posts: Vec::with_capacity(posts.len()),
            created_at,
        };
        for post_id in posts {
            user.attach_post(post_id);
        }
        user
    }

    /// IDs of the posts this user owns, oldest first
    pub fn posts(&self) -> &[Uuid] {
        &self.posts
    }

    pub(crate) fn attach_post(&mut self, post_id: Uuid) {
        if !self.posts.contains(&post_id) {
            self.posts.push(post_id);
        }
    }

    pub(crate) fn detach_post(&mut self, post_id: Uuid) -> bool {
        let before = self.posts.len();
        self.posts.retain(|id| *id != post_id);
        self.posts.len() != before
    }
}

/// User information that is safe to return to clients
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub status: String,
    pub posts: Vec<Uuid>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            status: user.status.clone(),
            posts: user.posts.clone(),
        }
    }
}
