//! gRPC service implementation.
//!
//! [`ItemfeedService`] adapts any [`ItemGateway`] to the generated
//! `api_server::Api` trait. A fault in one call becomes a `Status` for that
//! caller only; tonic runs every call in its own task, so neither the
//! process nor other in-flight calls are affected.

use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use futures_util::{Stream, StreamExt};
use tonic::{Request, Response, Status};
use tracing::debug;

use crate::server::proto;
use crate::server::proto::api_server::Api;
use crate::traits::ItemGateway;
use crate::{ItemfeedError, telemetry};

/// gRPC service that wraps an [`ItemGateway`] implementation.
pub struct ItemfeedService<G: ItemGateway> {
    gateway: Arc<G>,
}

impl<G: ItemGateway> ItemfeedService<G> {
    /// Create a new service wrapping the given gateway.
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

/// Convert [`ItemfeedError`] to [`tonic::Status`].
fn to_status(err: ItemfeedError) -> Status {
    match err {
        ItemfeedError::InvalidInput(msg) => Status::invalid_argument(msg),
        ItemfeedError::Timeout => Status::deadline_exceeded("request timed out"),
        ItemfeedError::NotImplemented(op) => Status::unimplemented(op),
        other => Status::internal(other.to_string()),
    }
}

/// Record the per-call counter and duration histogram.
fn observe(method: &'static str, started: Instant, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    metrics::counter!(telemetry::REQUESTS_TOTAL, "method" => method, "status" => status)
        .increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS, "method" => method)
        .record(started.elapsed().as_secs_f64());
}

#[tonic::async_trait]
impl<G: ItemGateway + 'static> Api for ItemfeedService<G> {
    async fn say_hello(
        &self,
        request: Request<proto::HelloRequest>,
    ) -> Result<Response<proto::Hello>, Status> {
        let started = Instant::now();
        let name = request.into_inner().name;
        debug!(%name, "sayHello");

        let result = self.gateway.say_hello(&name).await;
        observe("sayHello", started, result.is_ok());

        let message = result.map_err(to_status)?;
        Ok(Response::new(proto::Hello { message }))
    }

    async fn get_all(
        &self,
        request: Request<proto::ApiRequest>,
    ) -> Result<Response<proto::Items>, Status> {
        let started = Instant::now();
        let length = request.into_inner().length;
        debug!(length, "getAll");

        let result = self.gateway.get_all(length).await;
        observe("getAll", started, result.is_ok());

        let items = result.map_err(to_status)?;
        Ok(Response::new(items.into()))
    }

    type GetStreamStream = Pin<Box<dyn Stream<Item = Result<proto::Item, Status>> + Send>>;

    async fn get_stream(
        &self,
        request: Request<proto::ApiRequest>,
    ) -> Result<Response<Self::GetStreamStream>, Status> {
        let started = Instant::now();
        let length = request.into_inner().length;
        debug!(length, "getStream");

        let result = self.gateway.get_stream(length).await;
        observe("getStream", started, result.is_ok());

        let stream = result.map_err(to_status)?;
        let out = stream.map(|item| {
            item.map(|item| {
                metrics::counter!(telemetry::STREAM_ITEMS_TOTAL).increment(1);
                proto::Item::from(item)
            })
            .map_err(to_status)
        });
        Ok(Response::new(Box::pin(out)))
    }
}
