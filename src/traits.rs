//! Core ItemGateway trait

use async_trait::async_trait;
use futures_util::Stream;
use std::pin::Pin;

use crate::{Item, Result};

/// A pinned, boxed stream of items as produced by [`ItemGateway::get_stream`].
///
/// The stream is finite, ordered by ascending `id`, and not restartable —
/// obtaining the sequence again requires a fresh call. Dropping it before
/// exhaustion cancels the producing side.
pub type ItemStream = Pin<Box<dyn Stream<Item = Result<Item>> + Send>>;

/// The gateway trait every itemfeed implementation provides.
///
/// This is the only surface consumers (e.g. a web frontend) depend on;
/// [`EmbeddedGateway`](crate::EmbeddedGateway) serves it in-process and
/// [`ServiceClient`](crate::client::ServiceClient) forwards it over gRPC.
#[async_trait]
pub trait ItemGateway: Send + Sync {
    /// Greets `name`, returning `"Hello {name}!"`. Never fails on the
    /// service side; any error is a transport fault.
    async fn say_hello(&self, name: &str) -> Result<String>;

    /// Returns items `1..=length` in one fully-built batch.
    ///
    /// Non-positive lengths yield an empty vector, not an error.
    async fn get_all(&self, length: i32) -> Result<Vec<Item>>;

    /// Returns the same sequence as [`get_all`](Self::get_all), delivered
    /// lazily one element at a time.
    async fn get_stream(&self, length: i32) -> Result<ItemStream>;
}
