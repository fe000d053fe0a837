//! HTTP server module.
//!
//! The server includes:
//! - Permissive cross-origin policy (configurable)
//! - Graceful shutdown on SIGTERM/SIGINT

pub mod cors;
mod server;
mod shutdown;

pub use server::Server;
