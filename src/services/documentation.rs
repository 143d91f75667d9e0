use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI document for Trivia Bracket Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::teams::list_teams,
        crate::routes::teams::add_team,
        crate::routes::teams::get_team,
        crate::routes::teams::set_team_status,
        crate::routes::teams::apply_score_delta,
        crate::routes::game::start_match,
        crate::routes::questions::draw_question,
        crate::routes::websocket::ws_handler,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::team::TeamSummary,
            crate::dto::team::ScoreSummary,
            crate::dto::team::TeamsResponse,
            crate::dto::team::AddTeamRequest,
            crate::dto::team::TeamStatusRequest,
            crate::dto::team::ScoreDeltaRequest,
            crate::dto::game::MatchResponse,
            crate::dto::question::QuestionSummary,
            crate::dto::ws::RosterOutboundMessage,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "teams", description = "Roster registration, status and scores"),
        (name = "game", description = "Match pairing"),
        (name = "questions", description = "Question bank draws"),
        (name = "roster", description = "WebSocket roster stream"),
    )
)]
pub struct ApiDoc;
