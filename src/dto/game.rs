use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::team::TeamSummary;

/// Outcome of a match request: a fresh pairing, or the reason none could be made.
#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResponse {
    /// Two distinct teams that have not played yet.
    Paired {
        first_team: TeamSummary,
        second_team: TeamSummary,
    },
    /// Fewer than two teams are still waiting to play.
    NotEnoughTeams { eligible: usize },
}
