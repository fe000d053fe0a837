//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::error::StartupError;

use super::shutdown;

/// A bound listener with its router, ready to serve.
pub struct Server {
    listener: TcpListener,
    app: Router,
    local_addr: SocketAddr,
}

impl Server {
    /// Bind the configured host and port. The host may be an IP literal or a
    /// name such as `localhost`.
    pub async fn bind(app: Router, config: &AppConfig) -> Result<Self, StartupError> {
        let listener = TcpListener::bind((config.http.host.as_str(), config.http.port))
            .await
            .map_err(|source| StartupError::Bind {
                addr: config.listen_addr(),
                source,
            })?;
        let local_addr = listener.local_addr()?;

        Ok(Self {
            listener,
            app,
            local_addr,
        })
    }

    /// Address actually bound, which differs from the configured one for port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve until SIGINT or SIGTERM, then drain in-flight requests.
    pub async fn serve(self) -> Result<(), StartupError> {
        tracing::info!("Starting server at http://{}", self.local_addr);

        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown::shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
