use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use validator::Validate;

use crate::{
    dto::team::{AddTeamRequest, ScoreDeltaRequest, TeamStatusRequest, TeamSummary, TeamsResponse},
    error::AppError,
    services::{roster_service, score_service},
    state::SharedState,
};

/// Routes handling the roster: listing, registration, status flags and scores.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/teams", get(list_teams).post(add_team))
        .route("/teams/{name}", get(get_team))
        .route("/teams/{name}/status", put(set_team_status))
        .route("/teams/{name}/rounds/{round}/score", post(apply_score_delta))
}

/// List every team in roster order, read fresh from disk.
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses((status = 200, description = "Current roster", body = TeamsResponse))
)]
pub async fn list_teams(State(state): State<SharedState>) -> Result<Json<TeamsResponse>, AppError> {
    Ok(Json(roster_service::list_teams(&state).await?))
}

/// Register a new team with a zero score.
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    request_body = AddTeamRequest,
    responses(
        (status = 201, description = "Team registered", body = TeamSummary),
        (status = 400, description = "Invalid team name"),
        (status = 409, description = "A team with this name already exists")
    )
)]
pub async fn add_team(
    State(state): State<SharedState>,
    Json(payload): Json<AddTeamRequest>,
) -> Result<(StatusCode, Json<TeamSummary>), AppError> {
    payload.validate()?;
    let team = roster_service::add_team(&state, &payload.name).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// Return one team by its exact name.
#[utoipa::path(
    get,
    path = "/teams/{name}",
    tag = "teams",
    params(("name" = String, Path, description = "Exact team name")),
    responses(
        (status = 200, description = "Team found", body = TeamSummary),
        (status = 404, description = "Unknown team")
    )
)]
pub async fn get_team(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<TeamSummary>, AppError> {
    Ok(Json(roster_service::get_team(&state, &name).await?))
}

/// Set the played and/or eliminated flags of a team.
#[utoipa::path(
    put,
    path = "/teams/{name}/status",
    tag = "teams",
    params(("name" = String, Path, description = "Exact team name")),
    request_body = TeamStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = TeamSummary),
        (status = 404, description = "Unknown team")
    )
)]
pub async fn set_team_status(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    Json(payload): Json<TeamStatusRequest>,
) -> Result<Json<TeamSummary>, AppError> {
    payload.validate()?;
    Ok(Json(roster_service::set_status(&state, &name, payload).await?))
}

/// Add a signed delta to one round of a team.
#[utoipa::path(
    post,
    path = "/teams/{name}/rounds/{round}/score",
    tag = "teams",
    params(
        ("name" = String, Path, description = "Exact team name"),
        ("round" = i64, Path, description = "Round number, 1 to 4")
    ),
    request_body = ScoreDeltaRequest,
    responses(
        (status = 200, description = "Score updated", body = TeamSummary),
        (status = 400, description = "Round outside 1 to 4"),
        (status = 404, description = "Unknown team")
    )
)]
pub async fn apply_score_delta(
    State(state): State<SharedState>,
    Path((name, round)): Path<(String, i64)>,
    Json(payload): Json<ScoreDeltaRequest>,
) -> Result<Json<TeamSummary>, AppError> {
    let team = score_service::apply_score_delta(&state, &name, round, payload.delta).await?;
    Ok(Json(team))
}
