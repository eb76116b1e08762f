/**
 * Public Routes
 *
 * Endpoints reachable without a token:
 *
 * - `PUT /auth/signup` - User registration
 * - `POST /auth/login` - User login
 * - `POST /graphql` - GraphQL (resolvers check the token themselves)
 * - `GET /graphql` - GraphiQL explorer
 * - `GET /realtime` - Feed event stream (SSE)
 */

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{login, signup};
use crate::backend::graphql::{graphiql, graphql_handler};
use crate::backend::realtime::handle_realtime_subscription;
use crate::backend::server::state::AppState;

/// Configure public routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/signup", put(signup))
        .route("/auth/login", post(login))
        .route("/graphql", get(graphiql).post(graphql_handler))
        .route("/realtime", get(handle_realtime_subscription))
}
