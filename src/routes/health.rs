//! Health check endpoint for container orchestration.
//!
//! Returns 200 OK whenever the process is serving, which only happens after
//! the issue document loaded. Used by Kubernetes, systemd and load balancers.

/// Health check handler.
pub async fn health() -> &'static str {
    "ok"
}
