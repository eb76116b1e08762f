//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! - **`config`** - [`ServerConfig`] loaded from the environment
//! - **`state`** - [`AppState`] and its `FromRef` projections
//! - **`init`** - service wiring and app creation
//!
//! ```text
//! server/
//! ├── mod.rs      - Module exports
//! ├── config.rs   - Environment configuration
//! ├── state.rs    - AppState and FromRef implementations
//! └── init.rs     - Server initialization and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use feedhub::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let (app, state) = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Environment configuration
pub mod config;

/// Application state
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{build_state, create_app, open_store};
pub use state::AppState;
