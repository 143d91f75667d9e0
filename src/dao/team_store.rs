use std::path::PathBuf;

use tracing::debug;

use crate::dao::{
    codec::{decode_team, encode_team, team_line_name, validate_team_name},
    flat_file::{FlatFile, Rewrite},
    models::Team,
    storage::{StoreError, StoreResult},
};

/// Roster of the tournament, backed by one team record per line.
#[derive(Debug)]
pub struct TeamStore {
    file: FlatFile,
}

impl TeamStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: FlatFile::new(path),
        }
    }

    /// The underlying file handle, used at startup and by health checks.
    pub fn file(&self) -> &FlatFile {
        &self.file
    }

    /// Load every team in file order.
    pub async fn load_all(&self) -> StoreResult<Vec<Team>> {
        self.file.load_records(decode_team).await
    }

    /// Look a team up by its exact name.
    pub async fn find(&self, name: &str) -> StoreResult<Team> {
        self.load_all()
            .await?
            .into_iter()
            .find(|team| team.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Register a new team with a zeroed score and both flags cleared.
    pub async fn append(&self, name: &str) -> StoreResult<Team> {
        let name = name.trim();
        validate_team_name(name).map_err(StoreError::InvalidRecord)?;
        let team = Team::new(name);

        let created = self
            .file
            .mutate(|lines| {
                for line in &lines {
                    let existing = self.file.decode_line(line, decode_team)?;
                    if existing.name == team.name {
                        return Err(StoreError::DuplicateName(team.name.clone()));
                    }
                }

                let mut lines: Vec<String> = lines.into_iter().map(|line| line.text).collect();
                lines.push(encode_team(&team));
                Ok(Rewrite {
                    lines,
                    output: team.clone(),
                })
            })
            .await?;

        debug!(team = %created.name, "appended team record");
        Ok(created)
    }

    /// Replace the record of `team.name` with the supplied state.
    pub async fn update_one(&self, team: &Team) -> StoreResult<Team> {
        let replacement = team.clone();
        self.update_with(&team.name, move |_| Ok(replacement)).await
    }

    /// Replace the record of `name` with `update(current)` inside a single locked cycle.
    ///
    /// Only the matching line changes; every other line is written back byte for byte.
    /// The team name itself cannot be changed through this call.
    pub async fn update_with<F>(&self, name: &str, update: F) -> StoreResult<Team>
    where
        F: FnOnce(Team) -> StoreResult<Team>,
    {
        self.file
            .mutate(|lines| {
                let position = lines
                    .iter()
                    .map(|line| {
                        team_line_name(&line.text)
                            .map(|candidate| candidate == name)
                            .map_err(|source| StoreError::Format {
                                path: self.file.path().to_path_buf(),
                                line: line.number,
                                source,
                            })
                    })
                    .collect::<StoreResult<Vec<bool>>>()?
                    .into_iter()
                    .position(|matched| matched)
                    .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

                let current = self.file.decode_line(&lines[position], decode_team)?;
                let mut updated = update(current)?;
                updated.name = name.to_string();

                let mut lines: Vec<String> = lines.into_iter().map(|line| line.text).collect();
                lines[position] = encode_team(&updated);
                Ok(Rewrite {
                    lines,
                    output: updated,
                })
            })
            .await
    }
}
