//! [`ServiceClient`] — [`ItemGateway`] implementation that connects to
//! itemfeedd over gRPC.
//!
//! One `connect` establishes a channel that multiplexes all subsequent
//! calls over a single persistent connection; the client is cheap to clone
//! per call and never reconnects on its own.

use async_trait::async_trait;
use futures_util::StreamExt;
use tonic::transport::Channel;

use crate::server::proto;
use crate::server::proto::api_client::ApiClient;
use crate::traits::{ItemGateway, ItemStream};
use crate::{Item, ItemfeedError, Result};

/// An [`ItemGateway`] client that talks to a remote itemfeedd server.
pub struct ServiceClient {
    inner: ApiClient<Channel>,
}

impl ServiceClient {
    /// Connect to an itemfeedd server at the given address.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = ServiceClient::connect("http://127.0.0.1:50051").await?;
    /// ```
    pub async fn connect(addr: impl Into<String>) -> Result<Self> {
        let addr = addr.into();
        let inner = ApiClient::connect(addr.clone())
            .await
            .map_err(|e| ItemfeedError::Transport(format!("failed to connect to {addr}: {e}")))?;
        Ok(Self { inner })
    }
}

/// Convert [`tonic::Status`] to [`ItemfeedError`].
///
/// Every transport fault becomes an error value; a failed call is never
/// reported as an empty-but-valid response.
fn from_status(status: tonic::Status) -> ItemfeedError {
    match status.code() {
        tonic::Code::InvalidArgument => ItemfeedError::InvalidInput(status.message().to_string()),
        tonic::Code::DeadlineExceeded => ItemfeedError::Timeout,
        tonic::Code::Unimplemented => {
            // Leaking the message gives the &'static str the variant carries;
            // this path is cold.
            ItemfeedError::NotImplemented(Box::leak(status.message().to_string().into_boxed_str()))
        }
        _ => ItemfeedError::Transport(status.message().to_string()),
    }
}

#[async_trait]
impl ItemGateway for ServiceClient {
    async fn say_hello(&self, name: &str) -> Result<String> {
        let request = proto::HelloRequest {
            name: name.to_string(),
        };
        let response = self
            .inner
            .clone()
            .say_hello(request)
            .await
            .map_err(from_status)?;
        Ok(response.into_inner().message)
    }

    async fn get_all(&self, length: i32) -> Result<Vec<Item>> {
        let request = proto::ApiRequest { length };
        let response = self
            .inner
            .clone()
            .get_all(request)
            .await
            .map_err(from_status)?;
        Ok(response.into_inner().into())
    }

    async fn get_stream(&self, length: i32) -> Result<ItemStream> {
        let request = proto::ApiRequest { length };
        let response = self
            .inner
            .clone()
            .get_stream(request)
            .await
            .map_err(from_status)?;
        // Dropping the returned stream closes the underlying gRPC stream,
        // which cancels production on the server.
        let stream = response
            .into_inner()
            .map(|result| result.map(Into::into).map_err(from_status));
        Ok(Box::pin(stream))
    }
}
