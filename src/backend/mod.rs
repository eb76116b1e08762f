//! Backend Module
//!
//! All server-side code: an Axum HTTP server exposing the feed over REST,
//! GraphQL and a Server-Sent Events stream.
//!
//! # Architecture
//!
//! - **`server`** - configuration, application state, initialization
//! - **`routes`** - route configuration and router assembly
//! - **`auth`** - identity tokens, signup and login
//! - **`middleware`** - bearer-token guard for protected routes
//! - **`feed`** - post mutations, queries, images and REST handlers
//! - **`graphql`** - GraphQL schema and handler
//! - **`realtime`** - notification hub and SSE subscription
//! - **`store`** - persistence port with in-memory and PostgreSQL adapters
//! - **`error`** - the backend error type
//!
//! ```text
//! backend/
//! ├── mod.rs
//! ├── main.rs         - Server binary
//! ├── server/
//! ├── routes/
//! ├── auth/
//! ├── middleware/
//! ├── feed/
//! ├── graphql/
//! ├── realtime/
//! ├── store/
//! └── error/
//! ```
//!
//! # Request Flow
//!
//! 1. CORS layer
//! 2. Authentication middleware (protected routes only)
//! 3. Handler or GraphQL resolver
//! 4. `FeedService` / `AccountService`
//! 5. `FeedStore`, then image reclamation and hub publish
//!
//! Every failure is a [`BackendError`](error::BackendError), rendered as
//! `{message, status, data}` JSON on REST and as a GraphQL error with `code`
//! and `data` extensions.

/// Server initialization and state
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication
pub mod auth;

/// Request middleware
pub mod middleware;

/// Posts
pub mod feed;

/// GraphQL surface
pub mod graphql;

/// Real-time notifications
pub mod realtime;

/// Persistence
pub mod store;

/// Backend error types
pub mod error;
