use std::collections::BTreeMap;

/// Per-round scores of a team. Values are free integers and may go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub first_round: i32,
    pub second_round: i32,
    pub third_round: i32,
    pub fourth_round: i32,
}

impl Score {
    /// Build a score from the four round values in order.
    pub fn from_rounds([first_round, second_round, third_round, fourth_round]: [i32; 4]) -> Self {
        Self {
            first_round,
            second_round,
            third_round,
            fourth_round,
        }
    }

    /// The four round values in order.
    pub fn rounds(&self) -> [i32; 4] {
        [
            self.first_round,
            self.second_round,
            self.third_round,
            self.fourth_round,
        ]
    }

    /// Sum over every round, widened so it cannot overflow.
    pub fn total(&self) -> i64 {
        self.rounds().iter().map(|value| i64::from(*value)).sum()
    }
}

/// One line of the roster file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Unique, trimmed display name. Acts as the record key.
    pub name: String,
    pub score: Score,
    pub is_eliminated: bool,
    pub played: bool,
}

impl Team {
    /// A team as it is first registered: zero score, both flags cleared.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: Score::default(),
            is_eliminated: false,
            played: false,
        }
    }
}

/// One line of the question file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    /// Answers keyed by their zero-based position on the line.
    pub answers: BTreeMap<usize, String>,
    /// Index of the correct answer, taken verbatim from the file.
    pub correct_answer: i32,
}
