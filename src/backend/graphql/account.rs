//! Account queries and mutations
//!
//! `login` and `createUser` are open to anonymous callers; everything else
//! acts on the authenticated viewer's own record.

use async_graphql::{Context, ErrorExtensions, Object, Result as GraphQLResult};
use std::sync::Arc;

use crate::backend::auth::{AccountService, NewAccount};
use crate::backend::graphql::types::{AuthDataObject, UserInputData, UserObject};
use crate::backend::graphql::viewer;

fn accounts<'a>(ctx: &Context<'a>) -> GraphQLResult<&'a Arc<AccountService>> {
    ctx.data::<Arc<AccountService>>()
}

async fn set_status(ctx: &Context<'_>, status: String) -> GraphQLResult<UserObject> {
    let viewer = viewer(ctx)?;
    let user = accounts(ctx)?
        .set_status(viewer.user_id, status)
        .await
        .map_err(|e| e.extend())?;
    Ok(UserObject::from(&user))
}

#[derive(Default)]
pub struct AccountQuery;

#[Object]
impl AccountQuery {
    async fn login(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> GraphQLResult<AuthDataObject> {
        let auth = accounts(ctx)?
            .login(&email, &password)
            .await
            .map_err(|e| e.extend())?;
        Ok(auth.into())
    }

    /// The authenticated viewer
    async fn user(&self, ctx: &Context<'_>) -> GraphQLResult<UserObject> {
        let viewer = viewer(ctx)?;
        let user = accounts(ctx)?
            .current_user(viewer.user_id)
            .await
            .map_err(|e| e.extend())?;
        Ok(UserObject::from(&user))
    }

    async fn status(&self, ctx: &Context<'_>) -> GraphQLResult<String> {
        let viewer = viewer(ctx)?;
        accounts(ctx)?
            .status(viewer.user_id)
            .await
            .map_err(|e| e.extend())
    }
}

#[derive(Default)]
pub struct AccountMutation;

#[Object]
impl AccountMutation {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        user_input: UserInputData,
    ) -> GraphQLResult<UserObject> {
        let user = accounts(ctx)?
            .signup(NewAccount {
                email: user_input.email,
                name: user_input.name,
                password: user_input.password,
            })
            .await
            .map_err(|e| e.extend())?;
        Ok(UserObject::from(&user))
    }

    async fn change_status(&self, ctx: &Context<'_>, status: String) -> GraphQLResult<UserObject> {
        set_status(ctx, status).await
    }

    /// Same as `changeStatus`
    async fn update_status(&self, ctx: &Context<'_>, status: String) -> GraphQLResult<UserObject> {
        set_status(ctx, status).await
    }
}
