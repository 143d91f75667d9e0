use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report `ok` when both backing files can be read, `degraded` otherwise.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let mut degraded = false;
    for file in [state.teams().file(), state.questions().file()] {
        if let Err(err) = file.read_lines().await {
            warn!(error = %err, "backing file unreadable (degraded mode)");
            degraded = true;
        }
    }

    if degraded {
        HealthResponse::degraded()
    } else {
        HealthResponse::ok()
    }
}
