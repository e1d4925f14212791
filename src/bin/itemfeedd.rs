//! itemfeedd — itemfeed daemon.
//!
//! Serves the [`ItemGateway`](itemfeed::ItemGateway) over gRPC on a
//! configured address, with a bounded number of concurrent in-flight calls.
//! Runs until SIGINT; in-flight calls finish before the process exits.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tonic::transport::Server;
use tracing::{error, info};

use itemfeed::EmbeddedGateway;
use itemfeed::server::ItemfeedService;
use itemfeed::server::config::Config;
use itemfeed::server::proto::api_server::ApiServer;

/// Itemfeed daemon — greeting and item feed service.
#[derive(Parser)]
#[command(name = "itemfeedd")]
#[command(version = itemfeed::PKG_VERSION)]
#[command(about = "Itemfeed gRPC daemon")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Load configuration (defaults apply when no file exists)
    let config = Config::load(args.config.as_deref())?;

    // Parse address
    let addr: SocketAddr = config.server.address.parse().map_err(|e| {
        itemfeed::ItemfeedError::Configuration(format!(
            "Invalid address {}: {e}",
            config.server.address
        ))
    })?;

    let limits = config.server.limits.clone();
    info!(
        version = itemfeed::version_string(),
        %addr,
        max_concurrent = limits.max_concurrent_requests,
        "itemfeedd starting"
    );

    // Create gRPC service and start server
    let service = ItemfeedService::new(Arc::new(EmbeddedGateway::new()));
    let server = ApiServer::new(service);

    Server::builder()
        .concurrency_limit_per_connection(limits.max_concurrent_requests)
        .timeout(Duration::from_secs(limits.request_timeout_secs))
        .add_service(server)
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    info!("itemfeedd stopped");
    Ok(())
}

/// Resolves on SIGINT. Handing this to `serve_with_shutdown` stops the
/// accept loop while letting in-flight calls run to completion.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
