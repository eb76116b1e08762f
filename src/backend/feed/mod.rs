//! Feed Module
//!
//! Posts and everything that happens around them.
//!
//! # Architecture
//!
//! - **`service`** - [`FeedService`], holding the store, hub and image reclaimer
//! - **`mutations`** - create, update and delete of posts
//! - **`queries`** - paginated listing and single-post reads
//! - **`validation`** - input checks run before any store access
//! - **`ownership`** - the only code that links posts to their owners
//! - **`claims`** - which post an image reference belongs to, and when a
//!   file may be reclaimed
//! - **`images`** - upload storage and best-effort image reclamation
//! - **`handlers`** - REST handlers
//!
//! ```text
//! feed/
//! ├── mod.rs
//! ├── service.rs
//! ├── mutations.rs
//! ├── queries.rs
//! ├── validation.rs
//! ├── ownership.rs
//! ├── claims.rs
//! ├── images.rs
//! └── handlers/
//! ```
//!
//! The REST handlers and the GraphQL resolvers both go through
//! [`FeedService`], so the two surfaces share every rule.

/// Feed service
pub mod service;

/// Post mutations
mod mutations;

/// Post reads
mod queries;

/// Post input validation
pub mod validation;

/// Post ownership links
pub mod ownership;

/// Image reference claims
mod claims;

/// Image storage and reclamation
pub mod images;

/// REST handlers
pub mod handlers;

pub use claims::IMAGE_IN_USE;
pub use images::{DiskImages, ImageReclaimer};
pub use service::FeedService;
