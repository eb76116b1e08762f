//! Shared Module
//!
//! Domain types used by every part of the backend: stored records, the
//! client-facing views built from them, validation violations and the
//! real-time events broadcast after each post mutation.
//!
//! These types know nothing about HTTP, GraphQL or the database; the
//! `backend` module maps them onto those surfaces.

/// Post records, views and mutation inputs
pub mod post;

/// User records and views
pub mod user;

/// Real-time feed events
pub mod event;

/// Validation violations
pub mod error;

/// Monotonic timestamps
pub mod clock;

/// Re-export commonly used types for convenience
pub use post::{CreatePostInput, CreatorSummary, Post, PostPage, PostView, UpdatePostInput};
pub use user::{User, UserView};
pub use event::{FeedAction, FeedEvent, FEED_CHANNEL};
pub use error::{Violation, Violations};
pub use clock::MonotonicClock;
