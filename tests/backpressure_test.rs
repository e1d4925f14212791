//! Tests for streaming backpressure.
//!
//! Verifies that the bounded channel wrapper correctly applies backpressure
//! to stream producers when consumers fall behind, and stops production
//! when the consumer goes away.

use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use futures_util::stream::{self, Stream, StreamExt};
use itemfeed::backpressure::{DEFAULT_STREAM_BUFFER, bounded_stream};
use itemfeed::{Item, Result};

/// Create a stream that counts how many items have been produced.
fn counting_stream(
    count: u32,
    produced: Arc<AtomicU32>,
) -> Pin<Box<dyn Stream<Item = Result<Item>> + Send>> {
    let s = stream::iter((1..=count).map(move |i| {
        produced.fetch_add(1, Ordering::SeqCst);
        Ok(Item::synthetic(i as i32))
    }));
    Box::pin(s)
}

#[tokio::test]
async fn bounded_stream_delivers_all_items() {
    let produced = Arc::new(AtomicU32::new(0));
    let inner = counting_stream(10, produced.clone());
    let mut stream = bounded_stream(inner, 4);

    let mut received = 0;
    while let Some(item) = stream.next().await {
        assert!(item.is_ok());
        received += 1;
    }
    assert_eq!(received, 10);
    assert_eq!(produced.load(Ordering::SeqCst), 10);
}

#[tokio::test]
async fn bounded_stream_preserves_order() {
    let produced = Arc::new(AtomicU32::new(0));
    let inner = counting_stream(5, produced.clone());
    let mut stream = bounded_stream(inner, 2);

    let mut expected_id = 1;
    while let Some(item) = stream.next().await {
        assert_eq!(item.unwrap().id, expected_id);
        expected_id += 1;
    }
    assert_eq!(expected_id, 6);
}

#[tokio::test]
async fn bounded_stream_propagates_errors() {
    let inner: Pin<Box<dyn Stream<Item = Result<Item>> + Send>> = Box::pin(stream::iter(vec![
        Ok(Item::synthetic(1)),
        Err(itemfeed::ItemfeedError::Stream("boom".into())),
        Ok(Item::synthetic(2)),
    ]));

    let mut stream = bounded_stream(inner, 4);

    assert!(stream.next().await.unwrap().is_ok());
    assert!(stream.next().await.unwrap().is_err());
    assert!(stream.next().await.unwrap().is_ok());
}

#[tokio::test]
async fn bounded_stream_handles_empty_stream() {
    let inner: Pin<Box<dyn Stream<Item = Result<Item>> + Send>> = Box::pin(stream::empty());

    let mut stream = bounded_stream(inner, 4);
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn producer_stops_when_consumer_drops() {
    let produced = Arc::new(AtomicU32::new(0));

    // Create a stream of 1000 items but only consume 2
    let inner = counting_stream(1000, produced.clone());
    let mut stream = bounded_stream(inner, 4);

    stream.next().await;
    stream.next().await;

    // Drop the stream (consumer side)
    drop(stream);

    // Give the producer task a moment to notice the dropped receiver
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Producer should have stopped well before 1000
    // (at most buffer_size + a few items ahead)
    let total = produced.load(Ordering::SeqCst);
    assert!(
        total < 20,
        "producer should stop early when consumer drops, but produced {total} items"
    );
}

#[tokio::test]
async fn backpressure_limits_producer_ahead() {
    // Slow consumer: read one item, then pause. The producer should be
    // limited by the buffer size, not run unbounded ahead.
    let produced = Arc::new(AtomicU32::new(0));
    let inner = counting_stream(100, produced.clone());

    let buffer_size = 4;
    let mut stream = bounded_stream(inner, buffer_size);

    // Read one item to kick things off
    let _ = stream.next().await;

    // Give the producer a moment to fill the buffer
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Producer should be limited: consumed 1 + buffer capacity ahead.
    // Allow some tolerance for timing.
    let total = produced.load(Ordering::SeqCst);
    assert!(
        total <= (buffer_size as u32 + 2),
        "producer should be bounded by buffer, but produced {total} items (buffer={buffer_size})"
    );
}

#[tokio::test]
async fn default_buffer_keeps_one_element_in_flight() {
    let produced = Arc::new(AtomicU32::new(0));
    let inner = counting_stream(100, produced.clone());
    let mut stream = bounded_stream(inner, DEFAULT_STREAM_BUFFER);

    let _ = stream.next().await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    let total = produced.load(Ordering::SeqCst);
    assert!(
        total <= 3,
        "with the default buffer the producer should stay one element ahead, produced {total}"
    );
}
