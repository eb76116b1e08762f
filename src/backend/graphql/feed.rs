//! Feed queries and mutations
//!
//! Every resolver here requires an authenticated viewer.

use async_graphql::{Context, ErrorExtensions, Object, Result as GraphQLResult, ID};
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::feed::handlers::posts::parse_post_id;
use crate::backend::feed::FeedService;
use crate::backend::graphql::types::{PostData, PostInputData, PostObject};
use crate::backend::graphql::viewer;
use crate::shared::{CreatePostInput, UpdatePostInput};

fn feed<'a>(ctx: &Context<'a>) -> GraphQLResult<&'a Arc<FeedService>> {
    ctx.data::<Arc<FeedService>>()
}

fn post_id(id: &ID) -> GraphQLResult<Uuid> {
    parse_post_id(id.as_str()).map_err(|e| e.extend())
}

#[derive(Default)]
pub struct FeedQuery;

#[Object]
impl FeedQuery {
    /// One page of posts, newest first (pages start at 1)
    async fn posts(&self, ctx: &Context<'_>, page: Option<u32>) -> GraphQLResult<PostData> {
        viewer(ctx)?;
        let page = feed(ctx)?
            .list_posts(page.unwrap_or(1))
            .await
            .map_err(|e| e.extend())?;
        Ok(page.into())
    }

    async fn post(&self, ctx: &Context<'_>, id: ID) -> GraphQLResult<PostObject> {
        viewer(ctx)?;
        let post = feed(ctx)?
            .get_post(post_id(&id)?)
            .await
            .map_err(|e| e.extend())?;
        Ok(post.into())
    }
}

#[derive(Default)]
pub struct FeedMutation;

#[Object]
impl FeedMutation {
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        post_input: PostInputData,
    ) -> GraphQLResult<PostObject> {
        let user = viewer(ctx)?;
        let input = CreatePostInput {
            title: post_input.title,
            content: post_input.content,
            image_url: post_input.image_url,
        };
        let post = feed(ctx)?
            .create_post(user.user_id, input)
            .await
            .map_err(|e| e.extend())?;
        Ok(post.into())
    }

    /// Update a post; an `imageUrl` of `unspecified` keeps the current image
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: ID,
        post_input: PostInputData,
    ) -> GraphQLResult<PostObject> {
        let user = viewer(ctx)?;
        let input = UpdatePostInput {
            title: post_input.title,
            content: post_input.content,
            image_url: post_input.image_url,
        };
        let post = feed(ctx)?
            .update_post(user.user_id, post_id(&id)?, input)
            .await
            .map_err(|e| e.extend())?;
        Ok(post.into())
    }

    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> GraphQLResult<bool> {
        let user = viewer(ctx)?;
        feed(ctx)?
            .delete_post(user.user_id, post_id(&id)?)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }
}
