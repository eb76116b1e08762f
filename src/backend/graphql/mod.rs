//! GraphQL Module
//!
//! The typed query surface over the same services the REST handlers use.
//!
//! - **`types`** - object and input types
//! - **`account`** - `login`, `user`, `status`, `createUser`, `changeStatus`
//! - **`feed`** - `posts`, `post`, `createPost`, `updatePost`, `deletePost`
//!
//! The bearer token is read from the HTTP request. A missing or invalid token
//! leaves the request anonymous, and every protected resolver then fails
//! with code 401. Errors carry `code` and, for validation failures, `data`
//! in their extensions.

pub mod account;
pub mod feed;
pub mod types;

use async_graphql::{
    http::GraphiQLSource, Context, EmptySubscription, ErrorExtensions, MergedObject,
    Result as GraphQLResult, Schema,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use crate::backend::auth::AccountService;
use crate::backend::error::BackendError;
use crate::backend::feed::FeedService;
use crate::backend::middleware::{authenticate, AuthenticatedUser};
use crate::backend::server::state::AppState;

/// Root query object
#[derive(MergedObject, Default)]
pub struct QueryRoot(account::AccountQuery, feed::FeedQuery);

/// Root mutation object
#[derive(MergedObject, Default)]
pub struct MutationRoot(account::AccountMutation, feed::FeedMutation);

pub type FeedSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around the shared services
pub fn build_schema(feed: Arc<FeedService>, accounts: Arc<AccountService>) -> FeedSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(feed)
        .data(accounts)
        .finish()
}

/// The authenticated caller of the current request
pub(crate) fn viewer<'a>(ctx: &Context<'a>) -> GraphQLResult<&'a AuthenticatedUser> {
    ctx.data_opt::<AuthenticatedUser>()
        .ok_or_else(|| BackendError::unauthenticated("Not authenticated!").extend())
}

/// Execute a GraphQL request (POST /graphql)
pub async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if headers.contains_key(AUTHORIZATION) {
        if let Ok(user) = authenticate(&headers, &state.tokens) {
            request = request.data(user);
        }
    }
    state.schema.execute(request).await.into()
}

/// Serve the GraphiQL explorer (GET /graphql)
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
