use rand::{Rng, seq::index};
use thiserror::Error;

use crate::dao::models::Team;

/// Fewer than two teams are still waiting to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not enough teams left to pair (eligible: {eligible})")]
pub struct NoEligiblePair {
    /// Number of teams that have not played yet.
    pub eligible: usize,
}

/// Pick two distinct teams that have not played yet, uniformly at random.
///
/// Sampling happens on the filtered subset, so a played team can never be drawn
/// and the selection always finishes in one pass.
pub fn pick_pair<R>(roster: &[Team], rng: &mut R) -> Result<(Team, Team), NoEligiblePair>
where
    R: Rng + ?Sized,
{
    let eligible: Vec<&Team> = roster.iter().filter(|team| !team.played).collect();
    if eligible.len() < 2 {
        return Err(NoEligiblePair {
            eligible: eligible.len(),
        });
    }

    let picked = index::sample(rng, eligible.len(), 2);
    Ok((
        eligible[picked.index(0)].clone(),
        eligible[picked.index(1)].clone(),
    ))
}
