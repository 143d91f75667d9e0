use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{config::AppConfig, dao::models::Question};

/// Query string of the draw endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DrawQuestionQuery {
    /// Remove the drawn question from the bank so it is never asked again.
    #[serde(default)]
    pub consume: bool,
}

/// A drawn question along with the scoring options of the tournament.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionSummary {
    pub prompt: String,
    /// Answers keyed by their position, starting at 0.
    pub answers: BTreeMap<usize, String>,
    pub correct_answer: i32,
    /// Points awarded for a correct answer.
    pub points: i32,
    /// Time allowed to answer, when the tournament enforces one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_secs: Option<u64>,
    /// Whether the question was removed from the bank by this draw.
    pub consumed: bool,
}

impl QuestionSummary {
    pub fn from_question(question: Question, config: &AppConfig, consumed: bool) -> Self {
        Self {
            prompt: question.prompt,
            answers: question.answers,
            correct_answer: question.correct_answer,
            points: config.points_per_answer,
            time_limit_secs: config.time_per_question.map(|limit| limit.as_secs()),
            consumed,
        }
    }
}
