//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Addr(#[from] std::net::AddrParseError),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server.
///
/// Binds the configured address and serves requests until the process is
/// externally terminated. A bind failure (port already in use, insufficient
/// privilege) is returned to the caller and is fatal; there is no retry.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port).parse()?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening for connections");

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpServerConfig;
    use crate::routes::create_router;

    fn config_for(host: &str, port: u16) -> AppConfig {
        AppConfig {
            http: HttpServerConfig {
                host: host.to_string(),
                port,
            },
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn test_invalid_host_is_addr_error() {
        let config = config_for("not a host", 8000);

        let err = start_server(create_router(), &config).await.unwrap_err();
        assert!(matches!(err, ServerError::Addr(_)));
    }

    #[tokio::test]
    async fn test_occupied_port_is_bind_error() {
        // Hold the port with a plain listener, then try to start on it
        let occupant = TcpListener::bind("127.0.0.1:0").await.expect("bind occupant");
        let port = occupant.local_addr().expect("occupant addr").port();
        let config = config_for("127.0.0.1", port);

        let err = start_server(create_router(), &config).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind(_)));
    }
}
