use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    dao::models::{Score, Team},
    dto::validation::validate_team_name,
};

/// Per-round scores of a team, with their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScoreSummary {
    pub first_round: i32,
    pub second_round: i32,
    pub third_round: i32,
    pub fourth_round: i32,
    pub total: i64,
}

impl From<Score> for ScoreSummary {
    fn from(score: Score) -> Self {
        Self {
            first_round: score.first_round,
            second_round: score.second_round,
            third_round: score.third_round,
            fourth_round: score.fourth_round,
            total: score.total(),
        }
    }
}

/// Public view of one roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TeamSummary {
    pub name: String,
    pub score: ScoreSummary,
    pub is_eliminated: bool,
    pub played: bool,
}

impl From<Team> for TeamSummary {
    fn from(team: Team) -> Self {
        Self {
            name: team.name,
            score: team.score.into(),
            is_eliminated: team.is_eliminated,
            played: team.played,
        }
    }
}

/// Response payload listing the whole roster in file order.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamsResponse {
    pub teams: Vec<TeamSummary>,
}

/// Payload registering a new team.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddTeamRequest {
    pub name: String,
}

impl Validate for AddTeamRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_team_name(&self.name) {
            errors.add("name", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Explicit transition of the played / eliminated flags. Omitted fields are left as is.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TeamStatusRequest {
    #[serde(default)]
    pub played: Option<bool>,
    #[serde(default)]
    pub is_eliminated: Option<bool>,
}

impl Validate for TeamStatusRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        if self.played.is_none() && self.is_eliminated.is_none() {
            let mut errors = ValidationErrors::new();
            let mut err = ValidationError::new("empty_status");
            err.message = Some("at least one of `played` or `is_eliminated` is required".into());
            errors.add("played", err);
            return Err(errors);
        }
        Ok(())
    }
}

/// Signed score change for one round.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScoreDeltaRequest {
    pub delta: i32,
}
