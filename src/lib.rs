//! In-memory key-value store served over gRPC, with an HTTP/JSON gateway.
//!
//! The crate is split between a backend and a front:
//!
//! - **`store`**: the map itself and its readers-writer locking discipline.
//! - **`service`**: the gRPC handlers for Set/Get/Delete built on the store.
//! - **`server`**: TCP binding and the tonic server loop.
//! - **`gateway`**: an axum router that translates HTTP/JSON requests into
//!   gRPC client calls against the backend.
//! - **`config`**: command line options for the two binaries.

pub mod config;
pub mod gateway;
pub mod server;
pub mod service;
pub mod store;

/// Generated protobuf types and the `KvStore` service definition.
pub mod proto {
    tonic::include_proto!("memkv");
}
