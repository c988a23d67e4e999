//! Request and response bodies for the gateway's JSON surface.
//!
//! Each endpoint has a statically typed body; a request missing a field is
//! rejected before any backend call is constructed.

use serde::{Deserialize, Serialize};

/// Body of `POST /kv`.
#[derive(Debug, Deserialize)]
pub struct SetBody {
    pub key: String,
    pub value: String,
}

/// Reply for `POST /kv`. Mirrors the backend's Set response unchanged.
#[derive(Debug, Serialize)]
pub struct SetReply {
    pub success: bool,
    pub message: String,
}

/// Reply for `GET /kv/:key`. `found=false` comes with an empty value and is
/// a normal outcome, not an error.
#[derive(Debug, Serialize)]
pub struct GetReply {
    pub key: String,
    pub value: String,
    pub found: bool,
}

/// Reply for `DELETE /kv/:key`. `success=false` means the key was absent.
#[derive(Debug, Serialize)]
pub struct DeleteReply {
    pub success: bool,
}
