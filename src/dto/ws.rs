use std::time::SystemTime;

use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::{format_system_time, team::TeamSummary};

#[derive(Debug, Serialize, ToSchema)]
/// Messages pushed to roster websocket clients.
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RosterOutboundMessage {
    /// Full roster as read from the backing file at `sent_at`.
    Roster {
        sent_at: String,
        teams: Vec<TeamSummary>,
    },
}

impl RosterOutboundMessage {
    pub fn roster(teams: Vec<TeamSummary>, at: SystemTime) -> Self {
        Self::Roster {
            sent_at: format_system_time(at),
            teams,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::models::Team;

    #[test]
    fn roster_message_shape() {
        let message =
            RosterOutboundMessage::roster(vec![Team::new("Red").into()], SystemTime::UNIX_EPOCH);
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["type"], "roster");
        assert_eq!(json["sent_at"], "1970-01-01T00:00:00Z");
        assert_eq!(json["teams"][0]["name"], "Red");
    }
}
