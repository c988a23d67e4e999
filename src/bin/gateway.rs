use anyhow::Context;
use clap::Parser;
use memkv::config::GatewayConfig;
use memkv::gateway;
use memkv::proto::kv_store_client::KvStoreClient;
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

    let config = GatewayConfig::parse();

    info!("Starting memkv HTTP gateway");
    let client = KvStoreClient::connect(config.backend.clone())
        .await
        .with_context(|| format!("failed to connect to backend at {}", config.backend))?;
    info!("Connected to backend at {}", config.backend);

    let app = gateway::router(client);
    let listener = tokio::net::TcpListener::bind(&config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    info!("HTTP gateway listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
