//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::document::IssueDocument;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Built once by the startup routine after the issue document has loaded;
/// handlers only ever read from it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub issues: IssueDocument,
}

impl AppState {
    /// Creates a new application state from the given configuration and loaded document.
    pub fn new(config: AppConfig, issues: IssueDocument) -> Self {
        Self {
            config: Arc::new(config),
            issues,
        }
    }
}
