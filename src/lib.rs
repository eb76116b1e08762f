//! Feedhub - Main Library
//!
//! A social feed backend: users sign up, log in with time-limited identity
//! tokens, and create, edit and delete image posts. Every post mutation is
//! pushed to all connected clients in real time.
//!
//! # Module Structure
//!
//! - **`shared`** - domain types (users, posts, feed events, violations)
//!   that know nothing about HTTP or storage
//! - **`backend`** - the Axum server, services, store adapters and the REST,
//!   GraphQL and real-time surfaces
//!
//! # Usage
//!
//! ```rust,no_run
//! use feedhub::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let (app, state) = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! state.hub.shutdown();
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `BackendError` for every service and handler failure
//! - `StoreError` for persistence failures, converted at the service boundary
//! - `ConfigError` for malformed configuration at startup

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
