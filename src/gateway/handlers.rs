use std::time::Duration;

use axum::Json;
use axum::extract::{Extension, Path};
use tonic::Request;

use super::protocol::{DeleteReply, GetReply, SetBody, SetReply};
use super::{GatewayError, KvClient};
use crate::proto::{DeleteRequest, GetRequest, SetRequest};

/// Deadline for each backend call. If it expires while the call is queued
/// the caller gives up, but the store still completes the operation once it
/// holds the lock.
const RPC_TIMEOUT: Duration = Duration::from_secs(1);

pub async fn handle_set(
    Extension(mut client): Extension<KvClient>,
    Json(body): Json<SetBody>,
) -> Result<Json<SetReply>, GatewayError> {
    let mut request = Request::new(SetRequest {
        key: body.key,
        value: body.value,
    });
    request.set_timeout(RPC_TIMEOUT);

    let resp = client.set(request).await?.into_inner();
    Ok(Json(SetReply {
        success: resp.success,
        message: resp.message,
    }))
}

pub async fn handle_get(
    Extension(mut client): Extension<KvClient>,
    Path(key): Path<String>,
) -> Result<Json<GetReply>, GatewayError> {
    let mut request = Request::new(GetRequest { key: key.clone() });
    request.set_timeout(RPC_TIMEOUT);

    let resp = client.get(request).await?.into_inner();
    Ok(Json(GetReply {
        key,
        value: resp.value,
        found: resp.found,
    }))
}

pub async fn handle_delete(
    Extension(mut client): Extension<KvClient>,
    Path(key): Path<String>,
) -> Result<Json<DeleteReply>, GatewayError> {
    let mut request = Request::new(DeleteRequest { key });
    request.set_timeout(RPC_TIMEOUT);

    let resp = client.delete(request).await?.into_inner();
    Ok(Json(DeleteReply {
        success: resp.success,
    }))
}
