use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::info;

use crate::proto::kv_store_server::KvStore;
use crate::proto::{
    DeleteRequest, DeleteResponse, GetRequest, GetResponse, SetRequest, SetResponse,
};
use crate::store::{Store, StoreError};

/// gRPC implementation of the `KvStore` service.
///
/// Each handler invokes exactly one store operation and shapes its result
/// into the response message. Absence is reported through the `found` and
/// `success` flags, never as a gRPC error.
pub struct KvService {
    store: Arc<Store>,
}

impl KvService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

impl From<StoreError> for Status {
    fn from(err: StoreError) -> Self {
        Status::internal(err.to_string())
    }
}

#[tonic::async_trait]
impl KvStore for KvService {
    /// Store a key-value pair. Always succeeds.
    async fn set(&self, request: Request<SetRequest>) -> Result<Response<SetResponse>, Status> {
        let req = request.into_inner();
        info!("SET: {} = {}", req.key, req.value);
        self.store.set(req.key, req.value)?;

        Ok(Response::new(SetResponse {
            success: true,
            message: "Key set successfully".to_string(),
        }))
    }

    /// Retrieve a value for a given key. An absent key yields
    /// `found=false` with an empty value.
    async fn get(&self, request: Request<GetRequest>) -> Result<Response<GetResponse>, Status> {
        let req = request.into_inner();
        let value = self.store.get(&req.key)?;
        let found = value.is_some();
        info!("GET: {} (found: {})", req.key, found);

        Ok(Response::new(GetResponse {
            value: value.unwrap_or_default(),
            found,
        }))
    }

    /// Remove a key. `success=false` means the key was not present.
    async fn delete(
        &self,
        request: Request<DeleteRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        let req = request.into_inner();
        let removed = self.store.delete(&req.key)?;
        info!("DELETE: {} (success: {})", req.key, removed);

        Ok(Response::new(DeleteResponse { success: removed }))
    }
}
