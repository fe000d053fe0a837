//! FixIt API: serves the issue knowledge base over HTTP.
//!
//! The issue document is loaded once, before the listener is bound. If it is
//! missing or is not valid JSON, startup fails and no request is ever served.

pub mod config;
pub mod document;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

use std::path::Path;

pub use config::AppConfig;
pub use document::{DocumentError, IssueDocument};
pub use error::{AppError, StartupError};
pub use http::Server;
pub use routes::create_router;
pub use state::AppState;

/// Load the issue document at `data_path`, then serve until shutdown.
pub async fn run(config: AppConfig, data_path: &Path) -> Result<(), StartupError> {
    start(config, data_path).await?.serve().await
}

/// Load the issue document at `data_path` and bind the listener.
///
/// The returned server is ready: every request it answers sees the loaded
/// document. Nothing is bound when the document fails to load.
pub async fn start(config: AppConfig, data_path: &Path) -> Result<Server, StartupError> {
    let issues = match IssueDocument::load(data_path) {
        Ok(issues) => issues,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load issue document");
            return Err(e.into());
        }
    };

    tracing::info!(
        path = %data_path.display(),
        records = ?issues.record_count(),
        "Loaded issue document"
    );
    tracing::info!(
        enabled = config.cors.enabled,
        allow_credentials = config.cors.allow_credentials,
        "Cross-origin policy configured"
    );

    let state = AppState::new(config.clone(), issues);
    let app = create_router(state);

    Server::bind(app, &config).await
}
