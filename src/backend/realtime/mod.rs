//! Real-time Update Module
//!
//! Pushes feed changes (post created, updated, deleted) to every connected
//! client as they happen.
//!
//! - **`broadcast`** - the process-wide [`NotificationHub`]
//! - **`subscription`** - Server-Sent Events handler for `/realtime`
//!
//! # Example
//!
//! ```rust,ignore
//! use feedhub::backend::realtime::NotificationHub;
//!
//! let hub = NotificationHub::init(1000);
//! let mut rx = hub.subscribe().expect("hub running");
//! hub.publish(event);
//! ```

/// Publish/subscribe hub for feed events
pub mod broadcast;

/// Server-Sent Events subscription handler
pub mod subscription;

pub use broadcast::{FeedReceiver, NotificationHub, DEFAULT_CAPACITY};
pub use subscription::handle_realtime_subscription;
