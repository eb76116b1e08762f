/**
 * Application State Management
 *
 * The `AppState` struct is the central state container handed to every
 * handler. It holds the services, not data: all data lives behind the
 * store, and every field is cheap to clone.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the service they
 * need (`State<Arc<FeedService>>`, `State<NotificationHub>`, ...) instead of
 * the whole `AppState`.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::{AccountService, TokenService};
use crate::backend::feed::{DiskImages, FeedService};
use crate::backend::graphql::FeedSchema;
use crate::backend::realtime::NotificationHub;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<FeedService>,
    pub accounts: Arc<AccountService>,
    pub tokens: TokenService,
    pub hub: NotificationHub,
    pub images: Arc<DiskImages>,
    pub schema: FeedSchema,
}

impl FromRef<AppState> for Arc<FeedService> {
    fn from_ref(state: &AppState) -> Self {
        state.feed.clone()
    }
}

impl FromRef<AppState> for Arc<AccountService> {
    fn from_ref(state: &AppState) -> Self {
        state.accounts.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for NotificationHub {
    fn from_ref(state: &AppState) -> Self {
        state.hub.clone()
    }
}

impl FromRef<AppState> for Arc<DiskImages> {
    fn from_ref(state: &AppState) -> Self {
        state.images.clone()
    }
}
