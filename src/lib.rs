//! Itemfeed - greeting and synthetic item feed served over gRPC
//!
//! This crate provides a stable [`ItemGateway`] trait with three operations
//! (a greeting, a bulk item fetch, and a server-streamed item fetch) and two
//! implementations: an in-process [`EmbeddedGateway`] and a
//! [`ServiceClient`](client::ServiceClient) that forwards every call to a
//! running `itemfeedd` over gRPC. Consumers program against the trait and
//! stay unaware of which side of the wire they are on.
//!
//! # Embedded Example
//!
//! ```rust
//! use itemfeed::{EmbeddedGateway, ItemGateway};
//!
//! #[tokio::main]
//! async fn main() -> itemfeed::Result<()> {
//!     let gateway = EmbeddedGateway::new();
//!
//!     let greeting = gateway.say_hello("Ada").await?;
//!     assert_eq!(greeting, "Hello Ada!");
//!
//!     let items = gateway.get_all(3).await?;
//!     assert_eq!(items.len(), 3);
//!     Ok(())
//! }
//! ```
//!
//! # Remote Example
//!
//! ```rust,no_run
//! use itemfeed::ItemGateway;
//! use itemfeed::client::ServiceClient;
//!
//! #[tokio::main]
//! async fn main() -> itemfeed::Result<()> {
//!     let client = ServiceClient::connect("http://127.0.0.1:50051").await?;
//!     println!("{}", client.say_hello("Ada").await?);
//!     Ok(())
//! }
//! ```

pub mod backpressure;
#[cfg(feature = "client")]
pub mod client;
pub mod error;
pub mod gateway;
#[cfg(any(feature = "server", feature = "client"))]
pub mod server;
pub mod telemetry;
pub mod traits;
pub mod types;
pub mod version;

// Re-export main types at crate root
pub use error::{ItemfeedError, Result};
pub use gateway::EmbeddedGateway;
pub use traits::{ItemGateway, ItemStream};
pub use types::Item;
pub use version::{PKG_VERSION, version_string};
