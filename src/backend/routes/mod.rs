//! Routes Module
//!
//! HTTP route configuration.
//!
//! - **`router`** - main router creation, CORS and static images
//! - **`api_routes`** - public routes (auth, GraphQL, real-time)
//! - **`feed_routes`** - protected feed, status and upload routes

/// Main router creation
pub mod router;

/// Public routes
pub mod api_routes;

/// Protected routes
pub mod feed_routes;

pub use router::create_router;
