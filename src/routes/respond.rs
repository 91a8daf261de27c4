//! The fixed-payload responder handler.
//!
//! Every request the service receives ends up here, whatever its method,
//! path, headers, or body. The reply never varies.

use axum::Json;
use serde::Serialize;
use tracing::instrument;

/// Message carried in every response.
const MESSAGE: &str = "Hello World!";

/// Body of every response the service produces.
///
/// Serialized by axum's `Json`, which also sets the
/// `Content-Type: application/json` header.
#[derive(Debug, Serialize)]
pub struct Payload {
    data: &'static str,
}

/// Responder handler.
///
/// Takes no extractors: nothing about the inbound request is inspected.
#[instrument(name = "routes::respond")]
pub async fn respond() -> Json<Payload> {
    Json(Payload { data: MESSAGE })
}
