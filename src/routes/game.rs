use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::game::MatchResponse, error::AppError, services::match_service, state::SharedState,
};

/// Routes handling match pairing.
pub fn router() -> Router<SharedState> {
    Router::new().route("/games/start", post(start_match))
}

/// Pair two teams that have not played yet.
///
/// Answers `not_enough_teams` (still 200) when fewer than two teams are eligible.
#[utoipa::path(
    post,
    path = "/games/start",
    tag = "game",
    responses((status = 200, description = "Pairing outcome", body = MatchResponse))
)]
pub async fn start_match(State(state): State<SharedState>) -> Result<Json<MatchResponse>, AppError> {
    Ok(Json(match_service::start_match(&state).await?))
}
