/**
 * Router Configuration
 *
 * Combines every route group into a single Axum router.
 *
 * # Route Order
 *
 * 1. Public routes (auth, GraphQL, real-time stream)
 * 2. Protected routes (feed, status, image upload), behind the
 *    authentication middleware
 * 3. Stored images under `/images`
 * 4. Fallback handler (404)
 *
 * A permissive CORS layer wraps everything, so browser clients on another
 * origin can send the `Authorization` header.
 */

use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::backend::feed::images::IMAGE_URL_PREFIX;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::feed_routes::configure_feed_routes;
use crate::backend::server::state::AppState;

/// CORS policy shared by every route
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_api_routes(router);
    let router = configure_feed_routes(router, app_state.clone());

    let router = router
        .nest_service(
            &format!("/{}", IMAGE_URL_PREFIX),
            ServeDir::new(app_state.images.root()),
        )
        .fallback(fallback);

    router.layer(cors_layer()).with_state(app_state)
}

async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
