use std::sync::Arc;

use clap::Parser;
use memkv::config::ServerConfig;
use memkv::server::Server;
use memkv::store::Store;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let config = ServerConfig::parse();

    info!("Starting memkv gRPC store");
    let store = Arc::new(Store::new());
    let server = Server::bind(&config.listen, store).await?;
    info!("Listening on: {}", server.local_addr());

    server.run().await?;

    Ok(())
}
