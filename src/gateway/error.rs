use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Failure to complete a call against the backend store.
///
/// Distinct from key absence: an absent key is a normal 200 reply with its
/// flag set to false, while a backend failure is a server-side error.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("backend call failed: {0}")]
    Backend(#[from] tonic::Status),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        tracing::error!("gateway error: {}", self);
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
