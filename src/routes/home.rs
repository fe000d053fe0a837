//! Liveness message on `/`.

use axum::Json;
use serde::Serialize;

use crate::config::LIVENESS_MESSAGE;

#[derive(Debug, Serialize)]
pub struct Liveness {
    pub message: &'static str,
}

/// Returns the fixed liveness payload. Reachable only once the issue
/// document has loaded, so a response here means startup completed.
pub async fn index() -> Json<Liveness> {
    Json(Liveness {
        message: LIVENESS_MESSAGE,
    })
}
