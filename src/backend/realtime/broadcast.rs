/**
 * Notification Hub
 *
 * The single process-wide publish/subscribe channel for feed events. It is
 * constructed once at startup, injected into the services that publish, and
 * shut down when the server stops.
 *
 * # Delivery
 *
 * - `publish` reaches every subscriber connected at that moment; late
 *   subscribers never see earlier events (no replay, no backlog)
 * - Delivery is at-most-once and best-effort: publishing never blocks and
 *   never fails the caller
 * - Each event is immutable once published and is delivered as one message
 *   per subscriber, so concurrent publishes cannot interleave
 * - A subscriber that falls behind by more than the channel capacity skips
 *   the oldest events
 */

use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast;

use crate::shared::FeedEvent;

/// Default number of events buffered per subscriber
pub const DEFAULT_CAPACITY: usize = 1000;

/// Receiving half handed to each subscriber
pub type FeedReceiver = broadcast::Receiver<Arc<FeedEvent>>;

/// Broadcast service for feed events
///
/// Cloning yields another handle to the same hub.
#[derive(Clone, Debug)]
pub struct NotificationHub {
    sender: Arc<RwLock<Option<broadcast::Sender<Arc<FeedEvent>>>>>,
}

impl NotificationHub {
    /// Create the hub with room for `capacity` undelivered events per subscriber
    pub fn init(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        tracing::info!("[Realtime] Notification hub initialised (capacity {})", capacity);
        Self {
            sender: Arc::new(RwLock::new(Some(sender))),
        }
    }

    /// Deliver `event` to every currently connected subscriber
    ///
    /// Returns the number of subscribers the event was handed to. Having no
    /// subscribers, or a hub that was shut down, is not an error.
    pub fn publish(&self, event: FeedEvent) -> usize {
        let guard = self.sender.read().unwrap_or_else(PoisonError::into_inner);
        let Some(sender) = guard.as_ref() else {
            tracing::debug!("[Realtime] Hub shut down, dropping {:?} event", event.action());
            return 0;
        };

        let action = event.action();
        match sender.send(Arc::new(event)) {
            Ok(subscriber_count) => {
                tracing::debug!(
                    "[Realtime] {:?} event broadcast to {} subscribers",
                    action,
                    subscriber_count
                );
                subscriber_count
            }
            Err(_) => {
                tracing::debug!("[Realtime] No subscribers to receive {:?} event", action);
                0
            }
        }
    }

    /// Register a new subscriber
    ///
    /// Returns `None` once the hub has been shut down.
    pub fn subscribe(&self) -> Option<FeedReceiver> {
        self.sender
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(broadcast::Sender::subscribe)
    }

    /// Number of currently connected subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or(0, broadcast::Sender::receiver_count)
    }

    /// Close the hub
    ///
    /// Every open subscription ends once it has drained what was already
    /// published; later publishes are dropped.
    pub fn shutdown(&self) {
        let previous = self
            .sender
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            tracing::info!("[Realtime] Notification hub shut down");
        }
    }

    pub fn is_running(&self) -> bool {
        self.sender
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
