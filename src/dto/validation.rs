//! Validation helpers for DTOs.

use validator::ValidationError;

use crate::dao::codec::{FormatError, validate_team_name as check_team_name};

/// Validates that a team name can be stored on a single roster line.
///
/// # Examples
///
/// ```ignore
/// validate_team_name("Quiz Wizards") // Ok
/// validate_team_name("")             // Err - empty
/// validate_team_name("A ==> B")      // Err - contains the record separator
/// ```
pub fn validate_team_name(name: &str) -> Result<(), ValidationError> {
    match check_team_name(name.trim()) {
        Ok(()) => Ok(()),
        Err(FormatError::InvalidName { reason, .. }) => {
            let mut err = ValidationError::new("team_name");
            err.message = Some(reason.into());
            Err(err)
        }
        Err(other) => {
            let mut err = ValidationError::new("team_name");
            err.message = Some(other.to_string().into());
            Err(err)
        }
    }
}
