//! Roster reads and team registration / status transitions.

use tracing::info;

use crate::{
    dto::team::{TeamStatusRequest, TeamSummary, TeamsResponse},
    error::ServiceError,
    state::SharedState,
};

/// Return the whole roster in file order, read fresh from disk.
pub async fn list_teams(state: &SharedState) -> Result<TeamsResponse, ServiceError> {
    let teams = state
        .teams()
        .load_all()
        .await?
        .into_iter()
        .map(TeamSummary::from)
        .collect();
    Ok(TeamsResponse { teams })
}

/// Look one team up by its exact name.
pub async fn get_team(state: &SharedState, name: &str) -> Result<TeamSummary, ServiceError> {
    Ok(state.teams().find(name).await?.into())
}

/// Register a new team with a zero score.
pub async fn add_team(state: &SharedState, name: &str) -> Result<TeamSummary, ServiceError> {
    let team = state.teams().append(name).await?;
    info!(team = %team.name, "team registered");
    Ok(team.into())
}

/// Set the played and/or eliminated flags of one team.
pub async fn set_status(
    state: &SharedState,
    name: &str,
    request: TeamStatusRequest,
) -> Result<TeamSummary, ServiceError> {
    let TeamStatusRequest {
        played,
        is_eliminated,
    } = request;
    if played.is_none() && is_eliminated.is_none() {
        return Err(ServiceError::InvalidInput(
            "at least one of `played` or `is_eliminated` is required".into(),
        ));
    }

    let team = state
        .teams()
        .update_with(name, |mut team| {
            if let Some(played) = played {
                team.played = played;
            }
            if let Some(is_eliminated) = is_eliminated {
                team.is_eliminated = is_eliminated;
            }
            Ok(team)
        })
        .await?;

    info!(
        team = %team.name,
        played = team.played,
        eliminated = team.is_eliminated,
        "team status updated"
    );
    Ok(team.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::state_in;

    const ROSTER: &str = "Red\t\t==> [1, 2, 3, 4] | false | false\n\
                          Redwood\t\t==> [0, 0, 0, 0] | false | false\n";

    #[tokio::test]
    async fn lists_roster_fresh_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path(), ROSTER, "");

        let listed = list_teams(&state).await.unwrap();
        assert_eq!(listed.teams.len(), 2);
        assert_eq!(listed.teams[0].score.total, 10);

        // Hand edits are visible on the next request.
        std::fs::write(
            dir.path().join("teams.md"),
            "Blue\t\t==> [0, 0, 0, 0] | true | true\n",
        )
        .unwrap();
        let listed = list_teams(&state).await.unwrap();
        assert_eq!(listed.teams.len(), 1);
        assert_eq!(listed.teams[0].name, "Blue");
    }

    #[tokio::test]
    async fn lookup_matches_whole_names_only() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path(), ROSTER, "");

        let red = get_team(&state, "Red").await.unwrap();
        assert_eq!(red.name, "Red");
        assert_eq!(red.score.total, 10);

        let redwood = get_team(&state, "Redwood").await.unwrap();
        assert_eq!(redwood.score.total, 0);

        for missing in ["Re", "red", "Ghost"] {
            assert!(matches!(
                get_team(&state, missing).await,
                Err(ServiceError::NotFound(_))
            ));
        }
    }

    #[tokio::test]
    async fn add_then_list_contains_zeroed_team() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path(), ROSTER, "");

        let created = add_team(&state, "Green").await.unwrap();
        assert_eq!(created.score.total, 0);
        assert!(!created.played && !created.is_eliminated);

        let listed = list_teams(&state).await.unwrap();
        assert_eq!(listed.teams.last().unwrap(), &created);
    }

    #[tokio::test]
    async fn duplicate_name_is_a_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path(), ROSTER, "");
        assert!(matches!(
            add_team(&state, "Red").await,
            Err(ServiceError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn status_updates_touch_only_the_named_team() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path(), ROSTER, "");

        let updated = set_status(
            &state,
            "Red",
            TeamStatusRequest {
                played: Some(true),
                is_eliminated: None,
            },
        )
        .await
        .unwrap();
        assert!(updated.played);
        assert!(!updated.is_eliminated);

        let listed = list_teams(&state).await.unwrap();
        assert!(listed.teams[0].played);
        assert!(!listed.teams[1].played);
    }

    #[tokio::test]
    async fn status_of_unknown_team_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path(), ROSTER, "");
        let result = set_status(
            &state,
            "Ghost",
            TeamStatusRequest {
                played: None,
                is_eliminated: Some(true),
            },
        )
        .await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
