//! Backend Error Module
//!
//! This module defines the error taxonomy shared by every backend service and
//! both client surfaces (REST and GraphQL).
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - HTTP and GraphQL renderings
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use feedhub::backend::error::{BackendError, BackendResult};
//!
//! fn find(id: u32) -> BackendResult<u32> {
//!     if id == 0 {
//!         return Err(BackendError::not_found("Could not find post."));
//!     }
//!     Ok(id)
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, BackendResult, INTERNAL_MESSAGE};
