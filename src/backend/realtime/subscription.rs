/**
 * Real-time Subscription Handler
 *
 * Server-Sent Events stream for the `/realtime` endpoint. Each connected
 * client receives every feed event published while it is connected, as an
 * SSE event named `posts` whose data is the JSON-encoded [`FeedEvent`].
 *
 * # Connection Management
 *
 * - Connections are kept alive using the SSE keep-alive mechanism
 * - Lagged events are logged and skipped; they never drop the connection
 * - The stream ends when the hub shuts down
 *
 * # Example Response
 *
 * ```http
 * HTTP/1.1 200 OK
 * Content-Type: text/event-stream
 *
 * event: posts
 * data: {"action":"delete","postId":"..."}
 * ```
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::{self, Stream};
use tokio::sync::broadcast::error::RecvError;

use crate::backend::realtime::broadcast::{FeedReceiver, NotificationHub};
use crate::shared::{FeedEvent, FEED_CHANNEL};

/// Handle real-time subscription (GET /realtime)
///
/// # Errors
///
/// * `503 Service Unavailable` - the hub has been shut down
pub async fn handle_realtime_subscription(
    State(hub): State<NotificationHub>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, StatusCode> {
    let receiver = hub.subscribe().ok_or_else(|| {
        tracing::warn!("[Realtime] Subscription refused, hub is shut down");
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    tracing::info!(
        "[Realtime] Subscription active ({} subscribers)",
        hub.subscriber_count()
    );

    Ok(Sse::new(event_stream(receiver)).keep_alive(KeepAlive::default()))
}

/// Turn a hub receiver into a stream of SSE events
///
/// Only real events are yielded; keep-alive comments are injected by axum.
pub fn event_stream(receiver: FeedReceiver) -> impl Stream<Item = Result<Event, axum::Error>> {
    stream::unfold(receiver, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => match to_sse_event(&event) {
                    Some(sse_event) => return Some((Ok(sse_event), rx)),
                    None => continue,
                },
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("[Realtime] Receiver lagged, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => {
                    tracing::info!("[Realtime] Hub closed, ending stream");
                    return None;
                }
            }
        }
    })
}

fn to_sse_event(event: &FeedEvent) -> Option<Event> {
    match serde_json::to_string(event) {
        Ok(data) => Some(Event::default().event(FEED_CHANNEL).data(data)),
        Err(e) => {
            tracing::error!("[Realtime] Failed to serialize event: {:?}", e);
            None
        }
    }
}
