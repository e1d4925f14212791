//! Streaming backpressure via bounded channels.
//!
//! Wraps stream output in a bounded `tokio::sync::mpsc::channel` so that
//! producers block when consumers fall behind, and stop outright when the
//! consumer goes away. This is what gives `get_stream` its two contractual
//! properties: at most [`DEFAULT_STREAM_BUFFER`] elements in flight, and
//! prompt producer shutdown when the receiving side is dropped.

use std::pin::Pin;

use futures_util::{Stream, StreamExt};
use tokio_stream::wrappers::ReceiverStream;

use crate::Result;

/// Number of items buffered between producer and consumer.
///
/// A depth of 1 keeps a single element in flight: the producer sits in
/// `send` until the transport has accepted the previous element.
pub const DEFAULT_STREAM_BUFFER: usize = 1;

/// Wrap a stream in a bounded channel for backpressure.
///
/// Spawns a producer task that reads from `inner` and sends items through a
/// bounded `mpsc` channel. When the channel is full, the producer blocks
/// until the consumer reads. If the consumer drops the stream, the producer
/// stops.
///
/// # Panics
///
/// Requires a tokio runtime context (called within an async fn).
pub fn bounded_stream<T: Send + 'static>(
    inner: Pin<Box<dyn Stream<Item = Result<T>> + Send>>,
    buffer_size: usize,
) -> Pin<Box<dyn Stream<Item = Result<T>> + Send>> {
    let (tx, rx) = tokio::sync::mpsc::channel(buffer_size);

    tokio::spawn(async move {
        let mut inner = inner;
        while let Some(item) = inner.next().await {
            if tx.send(item).await.is_err() {
                break; // receiver dropped
            }
        }
    });

    Box::pin(ReceiverStream::new(rx))
}
