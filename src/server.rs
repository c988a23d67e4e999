use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tracing::info;

use crate::proto::kv_store_server::KvStoreServer;
use crate::service::KvService;
use crate::store::Store;

/// gRPC server owning the store.
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    store: Arc<Store>,
}

impl Server {
    /// Create and bind the server to the specified address, serving the
    /// given store.
    ///
    /// The store is constructed by the caller so tests can hold a handle to
    /// it alongside the server. Binding happens eagerly so the resolved
    /// address (including an ephemeral port) is known before the server
    /// starts serving.
    pub async fn bind(addr: &str, store: Arc<Store>) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        info!("TCP listener bound to {}", local_addr);

        Ok(Self {
            listener,
            local_addr,
            store,
        })
    }

    /// Get local listening address
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve the `KvStore` service until the process is terminated.
    pub async fn run(self) -> Result<(), tonic::transport::Error> {
        info!("gRPC KV store serving on {}", self.local_addr);

        let service = KvService::new(self.store);
        tonic::transport::Server::builder()
            .add_service(KvStoreServer::new(service))
            .serve_with_incoming(TcpListenerStream::new(self.listener))
            .await
    }
}
