//! GraphQL object and input types

use async_graphql::{InputObject, SimpleObject, ID};

use crate::backend::auth::AuthData;
use crate::shared::{CreatorSummary, PostPage, PostView, User};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Creator")]
pub struct CreatorObject {
    pub id: ID,
    pub name: String,
}

impl From<CreatorSummary> for CreatorObject {
    fn from(creator: CreatorSummary) -> Self {
        Self {
            id: ID(creator.id.to_string()),
            name: creator.name,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Post")]
pub struct PostObject {
    pub id: ID,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub creator: CreatorObject,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp
    pub updated_at: String,
}

impl From<PostView> for PostObject {
    fn from(post: PostView) -> Self {
        Self {
            id: ID(post.id.to_string()),
            title: post.title,
            content: post.content,
            image_url: post.image_url,
            creator: post.creator.into(),
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
        }
    }
}

/// One page of the feed
#[derive(SimpleObject, Clone, Debug)]
pub struct PostData {
    pub posts: Vec<PostObject>,
    pub total_posts: u64,
}

impl From<PostPage> for PostData {
    fn from(page: PostPage) -> Self {
        Self {
            posts: page.posts.into_iter().map(PostObject::from).collect(),
            total_posts: page.total_items,
        }
    }
}

/// A user as seen by themselves; never carries the password hash
#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: ID,
    pub email: String,
    pub name: String,
    pub status: String,
    pub posts: Vec<ID>,
}

impl From<&User> for UserObject {
    fn from(user: &User) -> Self {
        Self {
            id: ID(user.id.to_string()),
            email: user.email.clone(),
            name: user.name.clone(),
            status: user.status.clone(),
            posts: user.posts().iter().map(|id| ID(id.to_string())).collect(),
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "AuthData")]
pub struct AuthDataObject {
    pub token: String,
    pub user_id: ID,
}

impl From<AuthData> for AuthDataObject {
    fn from(auth: AuthData) -> Self {
        Self {
            token: auth.token,
            user_id: ID(auth.user_id.to_string()),
        }
    }
}

#[derive(InputObject, Debug)]
pub struct UserInputData {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Post payload; `imageUrl` comes from a prior `PUT /post-image`
#[derive(InputObject, Debug)]
pub struct PostInputData {
    pub title: String,
    pub content: String,
    pub image_url: String,
}
