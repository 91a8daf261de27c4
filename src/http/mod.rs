//! HTTP server module.
//!
//! Binds the configured TCP endpoint and runs the serve loop. There is no
//! TLS and no graceful shutdown: the process serves until externally killed,
//! and a failed bind is fatal.

mod server;

pub use server::{start_server, ServerError};
