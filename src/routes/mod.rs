//! HTTP route handlers.
//!
//! The service exposes a single responder that answers every method and every
//! path identically, so there is no route table to speak of: the handler is
//! installed as the router fallback.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod respond;

use axum::{middleware, Router};

use crate::middleware::request_id_layer;

/// Creates the Axum router.
///
/// The fallback catches every request axum would otherwise 404, which here
/// means all of them; no explicit routes are registered.
pub fn create_router() -> Router {
    Router::new()
        .fallback(respond::respond)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
