use tracing::{debug, info};

use crate::{
    dto::game::MatchResponse,
    error::ServiceError,
    state::{SharedState, match_maker::pick_pair},
};

/// Pair two teams that have not played yet.
///
/// Pairing does not flag either team as played; that stays an explicit status update.
pub async fn start_match(state: &SharedState) -> Result<MatchResponse, ServiceError> {
    let roster = state.teams().load_all().await?;
    let picked = pick_pair(&roster, &mut rand::rng());

    match picked {
        Ok((first, second)) => {
            info!(first = %first.name, second = %second.name, "match paired");
            Ok(MatchResponse::Paired {
                first_team: first.into(),
                second_team: second.into(),
            })
        }
        Err(err) => {
            debug!(eligible = err.eligible, "no match available");
            Ok(MatchResponse::NotEnoughTeams {
                eligible: err.eligible,
            })
        }
    }
}
