//! Application-level configuration loading: backing file locations, broadcast cadence
//! and question options.

use std::{env, fs, io::ErrorKind, path::PathBuf, time::Duration};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "TRIVIA_BRACKET_CONFIG_PATH";
const DEFAULT_ROSTER_PATH: &str = "Teams/teams.md";
const DEFAULT_QUESTIONS_PATH: &str = "Teams/trivia.md";
const DEFAULT_BROADCAST_INTERVAL_SECS: u64 = 5;
const DEFAULT_POINTS_PER_ANSWER: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Roster file, one team per line.
    pub roster_path: PathBuf,
    /// Question bank file, one question per line.
    pub questions_path: PathBuf,
    /// Delay between two roster pushes to websocket subscribers.
    pub broadcast_interval: Duration,
    /// Points awarded for a correct answer, reported alongside drawn questions.
    pub points_per_answer: i32,
    /// Optional time limit for answering a question.
    pub time_per_question: Option<Duration>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        roster = %app_config.roster_path.display(),
                        questions = %app_config.questions_path.display(),
                        "loaded configuration"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a JSON configuration document. Missing keys take their default value.
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<RawConfig>(contents).map(Into::into)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    roster_path: PathBuf,
    questions_path: PathBuf,
    broadcast_interval_secs: u64,
    points_per_answer: i32,
    time_per_question_secs: Option<u64>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_PATH),
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_PATH),
            broadcast_interval_secs: DEFAULT_BROADCAST_INTERVAL_SECS,
            points_per_answer: DEFAULT_POINTS_PER_ANSWER,
            time_per_question_secs: None,
        }
    }
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            roster_path: value.roster_path,
            questions_path: value.questions_path,
            broadcast_interval: Duration::from_secs(value.broadcast_interval_secs.max(1)),
            points_per_answer: value.points_per_answer,
            time_per_question: value.time_per_question_secs.map(Duration::from_secs),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_teams_directory() {
        let config = AppConfig::default();
        assert_eq!(config.roster_path, PathBuf::from("Teams/teams.md"));
        assert_eq!(config.questions_path, PathBuf::from("Teams/trivia.md"));
        assert_eq!(config.broadcast_interval, Duration::from_secs(5));
        assert_eq!(config.points_per_answer, 1);
        assert_eq!(config.time_per_question, None);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config =
            AppConfig::from_json(r#"{ "roster_path": "data/roster.md", "time_per_question_secs": 60 }"#)
                .unwrap();
        assert_eq!(config.roster_path, PathBuf::from("data/roster.md"));
        assert_eq!(config.questions_path, PathBuf::from("Teams/trivia.md"));
        assert_eq!(config.time_per_question, Some(Duration::from_secs(60)));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let config = AppConfig::from_json(r#"{ "broadcast_interval_secs": 0 }"#).unwrap();
        assert_eq!(config.broadcast_interval, Duration::from_secs(1));
    }

    #[test]
    fn unknown_keys_keep_configured_paths() {
        let config = AppConfig::from_json(
            r#"{ "roster_path": "data/roster.md", "broadcast_intervall_secs": 2 }"#,
        )
        .unwrap();
        assert_eq!(config.roster_path, PathBuf::from("data/roster.md"));
        assert_eq!(config.broadcast_interval, Duration::from_secs(5));
    }
}
