//! Text grammars of the roster and question files.
//!
//! Team line: `<name>\t\t==> [<r1>, <r2>, <r3>, <r4>] | <eliminated> | <played>`
//!
//! Question line: `<prompt> => [<answer0>, ..., <answerN>, <correct index>]`

use std::collections::BTreeMap;

use thiserror::Error;

use crate::dao::models::{Question, Score, Team};

const TEAM_SEPARATOR: &str = "==>";
const TEAM_NAME_PADDING: &str = "\t\t";
const QUESTION_SEPARATOR: &str = "=>";
/// Longest accepted team name, in characters.
pub const MAX_TEAM_NAME_LEN: usize = 64;

/// Reasons a single record line could not be decoded (or a record could not be encoded).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("missing `{0}` separator")]
    MissingSeparator(&'static str),
    #[error("expected `[scores] | eliminated | played`, found {0} segment(s)")]
    SegmentCount(usize),
    #[error("expected 4 round scores, found {0}")]
    ScoreCount(usize),
    #[error("invalid score value `{0}`")]
    ScoreValue(String),
    #[error("invalid {field} flag `{value}`")]
    FlagValue { field: &'static str, value: String },
    #[error("invalid team name `{name}`: {reason}")]
    InvalidName { name: String, reason: &'static str },
    #[error("expected at least one answer followed by the correct index, found {0} token(s)")]
    AnswerCount(usize),
    #[error("invalid correct answer index `{0}`")]
    AnswerIndex(String),
}

/// Check a team name against what the roster grammar can carry.
///
/// The name is expected to be trimmed already.
pub fn validate_team_name(name: &str) -> Result<(), FormatError> {
    let reason = if name.is_empty() {
        Some("name must not be empty")
    } else if name.chars().count() > MAX_TEAM_NAME_LEN {
        Some("name is too long")
    } else if name.contains(TEAM_SEPARATOR) {
        Some("name must not contain `==>`")
    } else if name.contains(['\t', '\r', '\n']) {
        Some("name must not contain tabs or line breaks")
    } else if name.trim() != name {
        Some("name must not start or end with whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(FormatError::InvalidName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Decode one roster line.
pub fn decode_team(line: &str) -> Result<Team, FormatError> {
    let (name, record) = split_team_line(line)?;
    if name.is_empty() {
        return Err(FormatError::InvalidName {
            name: String::new(),
            reason: "name must not be empty",
        });
    }

    let segments: Vec<&str> = record.split('|').collect();
    let [scores, eliminated, played] = segments.as_slice() else {
        return Err(FormatError::SegmentCount(segments.len()));
    };

    let scores: String = scores.chars().filter(|c| !matches!(c, '[' | ']')).collect();
    let tokens: Vec<&str> = scores.split(',').map(str::trim).collect();
    if tokens.len() != 4 {
        return Err(FormatError::ScoreCount(tokens.len()));
    }
    let mut rounds = [0i32; 4];
    for (slot, token) in rounds.iter_mut().zip(&tokens) {
        *slot = token
            .parse()
            .map_err(|_| FormatError::ScoreValue(token.to_string()))?;
    }

    Ok(Team {
        name: name.to_string(),
        score: Score::from_rounds(rounds),
        is_eliminated: parse_flag("eliminated", eliminated)?,
        played: parse_flag("played", played)?,
    })
}

/// Encode a team into its canonical roster line (without the trailing newline).
pub fn encode_team(team: &Team) -> String {
    let [first, second, third, fourth] = team.score.rounds();
    format!(
        "{}{TEAM_NAME_PADDING}{TEAM_SEPARATOR} [{first}, {second}, {third}, {fourth}] | {} | {}",
        team.name, team.is_eliminated, team.played
    )
}

/// Extract only the trimmed name token of a roster line.
///
/// Used to match records by whole-field equality without decoding the rest.
pub fn team_line_name(line: &str) -> Result<&str, FormatError> {
    split_team_line(line).map(|(name, _)| name)
}

/// Decode one question line.
pub fn decode_question(line: &str) -> Result<Question, FormatError> {
    let (prompt, record) = line
        .split_once(QUESTION_SEPARATOR)
        .ok_or(FormatError::MissingSeparator(QUESTION_SEPARATOR))?;

    let record: String = record.chars().filter(|c| !matches!(c, '[' | ']')).collect();
    let mut tokens: Vec<&str> = record.split(',').map(str::trim).collect();
    if tokens.len() < 2 {
        return Err(FormatError::AnswerCount(tokens.len()));
    }

    // Non-empty: checked above.
    let index = tokens.pop().unwrap_or_default();
    let correct_answer = index
        .parse()
        .map_err(|_| FormatError::AnswerIndex(index.to_string()))?;

    let answers = tokens
        .into_iter()
        .enumerate()
        .map(|(position, answer)| (position, answer.to_string()))
        .collect::<BTreeMap<_, _>>();

    Ok(Question {
        prompt: prompt.trim().to_string(),
        answers,
        correct_answer,
    })
}

/// Encode a question into its canonical line (without the trailing newline).
pub fn encode_question(question: &Question) -> String {
    let mut tokens: Vec<String> = question.answers.values().cloned().collect();
    tokens.push(question.correct_answer.to_string());
    format!(
        "{} {QUESTION_SEPARATOR} [{}]",
        question.prompt,
        tokens.join(", ")
    )
}

/// Blank lines carry no record and are dropped on read and write-back.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn split_team_line(line: &str) -> Result<(&str, &str), FormatError> {
    let mut parts = line.split(TEAM_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(record), None) => Ok((name.trim(), record)),
        _ => Err(FormatError::MissingSeparator(TEAM_SEPARATOR)),
    }
}

/// Boolean literals accepted in hand-edited rosters. Encoding always writes `true`/`false`.
fn parse_flag(field: &'static str, raw: &str) -> Result<bool, FormatError> {
    match raw.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        value => Err(FormatError::FlagValue {
            field,
            value: value.to_string(),
        }),
    }
}
