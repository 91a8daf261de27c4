//! Responder - a fixed-response JSON HTTP service.
//!
//! Answers every request on the configured port with the same JSON payload,
//! regardless of method, path, or headers, and reports its API generation on
//! stdout once at startup.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::AppConfig;
pub use routes::create_router;
