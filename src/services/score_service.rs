//! Round score updates.

use tracing::info;

use crate::{
    dao::storage::StoreError,
    dto::team::TeamSummary,
    error::ServiceError,
    state::{
        SharedState,
        scoring::{Round, apply_delta},
    },
};

/// Add `delta` to round `round` of team `name` and persist the result.
///
/// The round is checked before the roster is touched, so an invalid round never reads or
/// rewrites the file.
pub async fn apply_score_delta(
    state: &SharedState,
    name: &str,
    round: i64,
    delta: i32,
) -> Result<TeamSummary, ServiceError> {
    let round = Round::try_from(round)?;

    let team = state
        .teams()
        .update_with(name, |mut team| {
            apply_delta(&mut team.score, round, delta)
                .map_err(|overflow| StoreError::Rejected(overflow.to_string()))?;
            Ok(team)
        })
        .await?;

    info!(
        team = %team.name,
        round = round.number(),
        delta,
        total = team.score.total(),
        "score updated"
    );
    Ok(team.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::state_in;

    const ROSTER: &str = "Red\t\t==> [1, 2, 3, 4] | false | false\n\
                          Blue\t\t==> [0, 0, 0, 0] | true | false\n";

    #[tokio::test]
    async fn adds_delta_to_the_selected_round_only() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path(), ROSTER, "");

        let updated = apply_score_delta(&state, "Red", 2, 5).await.unwrap();
        assert_eq!(updated.score.first_round, 1);
        assert_eq!(updated.score.second_round, 7);
        assert_eq!(updated.score.total, 15);

        let updated = apply_score_delta(&state, "Red", 4, -10).await.unwrap();
        assert_eq!(updated.score.fourth_round, -6);

        let blue = state.teams().find("Blue").await.unwrap();
        assert_eq!(blue.score.total(), 0);
        assert!(blue.is_eliminated && !blue.played);
    }

    #[tokio::test]
    async fn invalid_round_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path(), ROSTER, "");

        for round in [0, 5, -1] {
            assert!(matches!(
                apply_score_delta(&state, "Red", round, 1).await,
                Err(ServiceError::InvalidInput(_))
            ));
        }
        let contents = std::fs::read_to_string(dir.path().join("teams.md")).unwrap();
        assert_eq!(contents, ROSTER);
    }

    #[tokio::test]
    async fn invalid_round_is_reported_before_unknown_team() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path(), ROSTER, "");
        assert!(matches!(
            apply_score_delta(&state, "Ghost", 9, 1).await,
            Err(ServiceError::InvalidInput(_))
        ));
        assert!(matches!(
            apply_score_delta(&state, "Ghost", 1, 1).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn overflow_is_rejected_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let roster = format!("Red\t\t==> [{}, 0, 0, 0] | false | false\n", i32::MAX);
        let state = state_in(dir.path(), &roster, "");

        assert!(matches!(
            apply_score_delta(&state, "Red", 1, 1).await,
            Err(ServiceError::InvalidInput(_))
        ));
        let contents = std::fs::read_to_string(dir.path().join("teams.md")).unwrap();
        assert_eq!(contents, roster);
    }

    #[tokio::test]
    async fn concurrent_deltas_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path(), ROSTER, "");

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let state = state.clone();
                tokio::spawn(async move { apply_score_delta(&state, "Blue", 3, 2).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let blue = state.teams().find("Blue").await.unwrap();
        assert_eq!(blue.score.third_round, 20);
    }
}
