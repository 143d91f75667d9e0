use thiserror::Error;

use crate::dao::models::Score;

/// Round number outside of 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid round {0}: expected 1, 2, 3 or 4")]
pub struct InvalidRound(pub i64);

/// Adding the delta would leave the `i32` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("score overflow in round {round} (current {current}, delta {delta})")]
pub struct ScoreOverflow {
    pub round: u8,
    pub current: i32,
    pub delta: i32,
}

/// The four scored rounds of the tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    First,
    Second,
    Third,
    Fourth,
}

impl Round {
    /// 1-based round number.
    pub fn number(self) -> u8 {
        match self {
            Round::First => 1,
            Round::Second => 2,
            Round::Third => 3,
            Round::Fourth => 4,
        }
    }

    fn slot(self, score: &mut Score) -> &mut i32 {
        match self {
            Round::First => &mut score.first_round,
            Round::Second => &mut score.second_round,
            Round::Third => &mut score.third_round,
            Round::Fourth => &mut score.fourth_round,
        }
    }
}

impl TryFrom<i64> for Round {
    type Error = InvalidRound;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Round::First),
            2 => Ok(Round::Second),
            3 => Ok(Round::Third),
            4 => Ok(Round::Fourth),
            other => Err(InvalidRound(other)),
        }
    }
}

/// Add `delta` to one round. Negative deltas and negative results are allowed.
pub fn apply_delta(score: &mut Score, round: Round, delta: i32) -> Result<(), ScoreOverflow> {
    let slot = round.slot(score);
    *slot = slot.checked_add(delta).ok_or(ScoreOverflow {
        round: round.number(),
        current: *slot,
        delta,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_rounds() {
        assert_eq!(Round::try_from(1), Ok(Round::First));
        assert_eq!(Round::try_from(4), Ok(Round::Fourth));
        assert_eq!(Round::try_from(3).unwrap().number(), 3);
    }

    #[test]
    fn rejects_rounds_outside_range() {
        assert_eq!(Round::try_from(0), Err(InvalidRound(0)));
        assert_eq!(Round::try_from(5), Err(InvalidRound(5)));
        assert_eq!(Round::try_from(-1), Err(InvalidRound(-1)));
    }

    #[test]
    fn adds_delta_to_the_named_round_only() {
        let mut score = Score::from_rounds([0, 10, 0, 0]);
        apply_delta(&mut score, Round::Second, 5).unwrap();
        assert_eq!(score, Score::from_rounds([0, 15, 0, 0]));
    }

    #[test]
    fn negative_results_are_kept() {
        let mut score = Score::default();
        apply_delta(&mut score, Round::Fourth, -3).unwrap();
        assert_eq!(score.fourth_round, -3);
    }

    #[test]
    fn overflow_is_reported_and_score_untouched() {
        let mut score = Score::from_rounds([i32::MAX, 0, 0, 0]);
        let err = apply_delta(&mut score, Round::First, 1).unwrap_err();
        assert_eq!(err.round, 1);
        assert_eq!(score.first_round, i32::MAX);
    }
}
