//! HTTP/JSON gateway for the key-value store.
//!
//! Translates REST-style requests into gRPC calls against the backend:
//!
//! - `POST /kv` with `{key, value}` → Set
//! - `GET /kv/:key` → Get
//! - `DELETE /kv/:key` → Delete
//!
//! Absence (`found=false` / `success=false`) is a normal 200 response; only
//! transport failures toward the backend surface as HTTP errors.

pub mod error;
pub mod handlers;
pub mod protocol;

pub use error::GatewayError;

use axum::Router;
use axum::extract::Extension;
use axum::routing::{get, post};
use tonic::transport::Channel;
use tower_http::trace::TraceLayer;

use crate::proto::kv_store_client::KvStoreClient;

/// Connected gRPC client handle; cheap to clone per request.
pub type KvClient = KvStoreClient<Channel>;

/// Build the gateway router around a connected backend client.
pub fn router(client: KvClient) -> Router {
    Router::new()
        .route("/kv", post(handlers::handle_set))
        .route(
            "/kv/:key",
            get(handlers::handle_get).delete(handlers::handle_delete),
        )
        .layer(Extension(client))
        .layer(TraceLayer::new_for_http())
}
