pub mod hub;
pub mod match_maker;
pub mod scoring;

use std::sync::Arc;

use crate::{
    config::AppConfig,
    dao::{question_bank::QuestionBank, storage::StoreResult, team_store::TeamStore},
};

pub use self::hub::{RosterHub, ServerEvent};

pub type SharedState = Arc<AppState>;

/// Capacity of the roster broadcast channel; slow subscribers skip older snapshots.
const ROSTER_HUB_CAPACITY: usize = 16;

/// Central application state: the two backing stores and the roster push hub.
///
/// Nothing here caches tournament data; every request goes back to the files.
pub struct AppState {
    config: Arc<AppConfig>,
    teams: TeamStore,
    questions: QuestionBank,
    roster_hub: RosterHub,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(Self {
            teams: TeamStore::new(config.roster_path.clone()),
            questions: QuestionBank::new(config.questions_path.clone()),
            roster_hub: RosterHub::new(ROSTER_HUB_CAPACITY),
            config: Arc::new(config),
        })
    }

    /// Create any missing backing file so the first requests can read them.
    pub async fn prepare_storage(&self) -> StoreResult<()> {
        self.teams.file().ensure_exists().await?;
        self.questions.file().ensure_exists().await
    }

    pub fn config(&self) -> Arc<AppConfig> {
        self.config.clone()
    }

    pub fn teams(&self) -> &TeamStore {
        &self.teams
    }

    pub fn questions(&self) -> &QuestionBank {
        &self.questions
    }

    /// Broadcast hub feeding the roster websocket stream.
    pub fn roster_hub(&self) -> &RosterHub {
        &self.roster_hub
    }
}
