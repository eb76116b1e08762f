//! Feed service
//!
//! Holds the collaborators the feed operations need. The operations live in
//! `mutations` (create, update, delete) and `queries` (list, get).

use std::sync::Arc;

use crate::backend::feed::images::ImageReclaimer;
use crate::backend::realtime::NotificationHub;
use crate::backend::store::FeedStore;
use crate::shared::MonotonicClock;

/// Orchestrates every read and write of posts
pub struct FeedService {
    pub(super) store: Arc<dyn FeedStore>,
    pub(super) hub: NotificationHub,
    pub(super) images: Arc<dyn ImageReclaimer>,
    pub(super) clock: MonotonicClock,
}

impl FeedService {
    pub fn new(
        store: Arc<dyn FeedStore>,
        hub: NotificationHub,
        images: Arc<dyn ImageReclaimer>,
    ) -> Self {
        Self {
            store,
            hub,
            images,
            clock: MonotonicClock::new(),
        }
    }

    pub fn hub(&self) -> &NotificationHub {
        &self.hub
    }
}
