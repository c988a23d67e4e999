use clap::Parser;

/// Default gRPC listening address
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:50051";
/// Default HTTP gateway listening address
pub const DEFAULT_GATEWAY_ADDR: &str = "0.0.0.0:8080";
/// Default backend endpoint the gateway dials
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:50051";

/// Command line options for the gRPC store server
#[derive(Debug, Parser)]
#[command(name = "memkv-server", about = "In-memory key-value store over gRPC")]
pub struct ServerConfig {
    /// Address to listen on for gRPC connections
    #[arg(long, default_value = DEFAULT_SERVER_ADDR)]
    pub listen: String,
}

/// Command line options for the HTTP gateway
#[derive(Debug, Parser)]
#[command(name = "memkv-gateway", about = "HTTP/JSON gateway for the memkv store")]
pub struct GatewayConfig {
    /// Address to listen on for HTTP requests
    #[arg(long, default_value = DEFAULT_GATEWAY_ADDR)]
    pub listen: String,

    /// Endpoint of the backend gRPC store
    #[arg(long, default_value = DEFAULT_BACKEND_URL)]
    pub backend: String,
}
