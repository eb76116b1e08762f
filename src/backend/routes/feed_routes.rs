/**
 * Protected Routes
 *
 * Every route here requires a valid bearer token; the authentication
 * middleware rejects the request with 401 before any handler runs.
 *
 * - `GET /feed/posts?page=N`
 * - `POST /feed/post`
 * - `GET|PUT|DELETE /feed/post/{postId}`
 * - `GET|PUT /status`
 * - `PUT /post-image`
 */

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::backend::feed::handlers::{
    create_post, delete_post, get_post, get_status, list_posts, store_post_image, update_post,
    update_status,
};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Largest accepted request body (multipart uploads included)
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Configure protected routes
pub fn configure_feed_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/feed/posts", get(list_posts))
        .route("/feed/post", post(create_post))
        .route(
            "/feed/post/{post_id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route("/status", get(get_status).put(update_status))
        .route("/post-image", put(store_post_image))
        .route_layer(from_fn_with_state(app_state, auth_middleware))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    router.merge(protected)
}
