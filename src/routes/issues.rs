//! Handler for the full issue document.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderValue},
    response::IntoResponse,
    Extension,
};
use tracing::instrument;

use crate::middleware::RequestId;
use crate::state::AppState;

/// Returns the whole issue document exactly as loaded at startup.
#[instrument(name = "issues::list", skip(state, request_id))]
pub async fn list(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> impl IntoResponse {
    tracing::debug!(
        request_id = %request_id.0,
        records = ?state.issues.record_count(),
        "Serving issue document"
    );

    (
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        state.issues.body(),
    )
}
