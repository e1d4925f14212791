//! In-process gateway implementation.
//!
//! [`EmbeddedGateway`] is the service-side logic behind all three
//! operations. It holds no state between calls: every response is computed
//! from the request alone, so repeated calls with the same input produce
//! identical results.

use async_trait::async_trait;

use crate::backpressure::{self, DEFAULT_STREAM_BUFFER};
use crate::traits::{ItemGateway, ItemStream};
use crate::{Item, Result};

/// The in-process [`ItemGateway`] implementation.
///
/// Used directly by `itemfeedd` to back the gRPC service, or embedded in a
/// consumer that wants the operations without a network hop.
#[derive(Debug, Clone)]
pub struct EmbeddedGateway {
    stream_buffer: usize,
}

impl EmbeddedGateway {
    /// Create a gateway with the default stream buffer depth.
    pub fn new() -> Self {
        Self {
            stream_buffer: DEFAULT_STREAM_BUFFER,
        }
    }

    /// Override how many stream elements may be in flight at once.
    pub fn with_stream_buffer(mut self, buffer_size: usize) -> Self {
        self.stream_buffer = buffer_size.max(1);
        self
    }
}

impl Default for EmbeddedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemGateway for EmbeddedGateway {
    async fn say_hello(&self, name: &str) -> Result<String> {
        Ok(format!("Hello {name}!"))
    }

    async fn get_all(&self, length: i32) -> Result<Vec<Item>> {
        // 1..=length is empty when length <= 0: non-positive counts
        // produce no items rather than an error.
        Ok((1..=length).map(Item::synthetic).collect())
    }

    async fn get_stream(&self, length: i32) -> Result<ItemStream> {
        let items = (1..=length).map(Item::synthetic).map(Result::Ok);
        Ok(backpressure::bounded_stream(
            Box::pin(tokio_stream::iter(items)),
            self.stream_buffer,
        ))
    }
}
