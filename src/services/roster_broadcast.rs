//! Periodic roster push feeding every websocket subscriber.

use std::time::SystemTime;

use thiserror::Error;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use crate::{
    dao::storage::StoreError,
    dto::{team::TeamSummary, ws::RosterOutboundMessage},
    state::{ServerEvent, SharedState},
};

/// Reasons a roster snapshot could not be produced.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("roster serialization failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Read the roster from disk and serialise it as one websocket frame.
pub async fn roster_event(state: &SharedState) -> Result<ServerEvent, SnapshotError> {
    let teams = state
        .teams()
        .load_all()
        .await?
        .into_iter()
        .map(TeamSummary::from)
        .collect();
    let message = RosterOutboundMessage::roster(teams, SystemTime::now());
    Ok(ServerEvent::json(&message)?)
}

/// Publish one snapshot to current subscribers. Skips the disk read when nobody listens.
pub async fn publish_once(state: &SharedState) {
    if state.roster_hub().subscriber_count() == 0 {
        return;
    }

    match roster_event(state).await {
        Ok(event) => {
            let delivered = state.roster_hub().broadcast(event);
            debug!(delivered, "roster snapshot pushed");
        }
        Err(err) => warn!(error = %err, "roster snapshot skipped"),
    }
}

/// Push a fresh roster snapshot every configured interval, forever.
///
/// A failed read skips that tick only; the loop keeps running.
pub async fn run(state: SharedState) {
    let period = state.config().broadcast_interval;
    info!(period_secs = period.as_secs(), "roster broadcast started");

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        publish_once(&state).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::state_in;

    #[tokio::test]
    async fn subscribers_receive_current_roster() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(
            dir.path(),
            "Red\t\t==> [1, 0, 0, 0] | false | false\n",
            "",
        );
        let mut receiver = state.roster_hub().subscribe();

        publish_once(&state).await;
        let event = receiver.recv().await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&event.data).unwrap();
        assert_eq!(json["type"], "roster");
        assert_eq!(json["teams"][0]["name"], "Red");
        assert_eq!(json["teams"][0]["score"]["total"], 1);
    }

    #[tokio::test]
    async fn corrupt_roster_skips_the_tick() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path(), "garbage line\n", "");
        let mut receiver = state.roster_hub().subscribe();

        publish_once(&state).await;
        assert!(receiver.try_recv().is_err());

        std::fs::write(
            dir.path().join("teams.md"),
            "Blue\t\t==> [0, 0, 0, 0] | false | false\n",
        )
        .unwrap();
        publish_once(&state).await;
        let event = receiver.recv().await.unwrap();
        assert!(event.data.contains("Blue"));
    }
}
