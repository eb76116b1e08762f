/**
 * Server Initialization
 *
 * Wires the services together and builds the router.
 *
 * # Initialization Process
 *
 * 1. Open the store (PostgreSQL when configured, in-memory otherwise)
 * 2. Initialise the notification hub
 * 3. Create the token, account and feed services
 * 4. Build the GraphQL schema over the same services
 * 5. Create the router
 *
 * The hub is returned inside the state so the caller can shut it down once
 * the server stops.
 */

use axum::Router;
use std::sync::Arc;

use crate::backend::auth::{AccountService, TokenService};
use crate::backend::feed::{DiskImages, FeedService};
use crate::backend::graphql::build_schema;
use crate::backend::realtime::NotificationHub;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{FeedStore, MemoryStore, PgStore, StoreResult};

/// Open the store selected by the configuration
pub async fn open_store(config: &ServerConfig) -> StoreResult<Arc<dyn FeedStore>> {
    match &config.database_url {
        Some(url) => Ok(Arc::new(PgStore::connect(url).await?)),
        None => Ok(Arc::new(MemoryStore::new())),
    }
}

/// Build the application state on top of an already opened store
pub fn build_state(config: &ServerConfig, store: Arc<dyn FeedStore>) -> AppState {
    let hub = NotificationHub::init(config.broadcast_capacity);
    let tokens = TokenService::new(&config.jwt_secret);
    let images = Arc::new(DiskImages::new(config.image_dir.clone()));

    let accounts = Arc::new(AccountService::new(
        store.clone(),
        tokens.clone(),
        config.bcrypt_cost,
    ));
    let feed = Arc::new(FeedService::new(store, hub.clone(), images.clone()));
    let schema = build_schema(feed.clone(), accounts.clone());

    tracing::info!("Services initialised (images in {})", images.root().display());

    AppState {
        feed,
        accounts,
        tokens,
        hub,
        images,
        schema,
    }
}

/// Create the Axum application
///
/// # Errors
///
/// Fails when the configured database cannot be reached or migrated.
pub async fn create_app(config: &ServerConfig) -> StoreResult<(Router<()>, AppState)> {
    tracing::info!("Initializing feed backend server");

    let store = open_store(config).await?;
    let state = build_state(config, store);
    let app = create_router(state.clone());

    tracing::info!("Router configured");
    Ok((app, state))
}
