use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::question::{DrawQuestionQuery, QuestionSummary},
    error::AppError,
    services::question_service,
    state::SharedState,
};

pub fn router() -> Router<SharedState> {
    Router::new().route("/questions/draw", get(draw_question))
}

/// Draw a random question, removing it from the bank when `consume=true`.
#[utoipa::path(
    get,
    path = "/questions/draw",
    tag = "questions",
    params(DrawQuestionQuery),
    responses(
        (status = 200, description = "Drawn question", body = QuestionSummary),
        (status = 404, description = "Question bank is empty")
    )
)]
pub async fn draw_question(
    State(state): State<SharedState>,
    Query(query): Query<DrawQuestionQuery>,
) -> Result<Json<QuestionSummary>, AppError> {
    Ok(Json(
        question_service::draw_question(&state, query.consume).await?,
    ))
}
