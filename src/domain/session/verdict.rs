//! Verdict - the scored outcome of an accusation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// Score at or above which an accusation counts as solving the case.
pub const SOLVE_THRESHOLD: Percentage = Percentage::new(80);

/// The evaluator's judgement of the player's accusation.
///
/// Produced once per accusation submission and discarded on return to
/// the menu. When derived from a numeric score, `correct` is defined
/// as `percentage >= 80`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    correct: bool,
    percentage: Percentage,
    feedback: String,
}

impl Verdict {
    /// Creates a verdict with an explicit correctness flag.
    pub fn new(correct: bool, percentage: Percentage, feedback: impl Into<String>) -> Self {
        Self {
            correct,
            percentage,
            feedback: feedback.into(),
        }
    }

    /// Creates a verdict from a numeric score, deriving `correct`
    /// from the solve threshold.
    pub fn from_score(percentage: Percentage, feedback: impl Into<String>) -> Self {
        Self::new(percentage.at_least(SOLVE_THRESHOLD), percentage, feedback)
    }

    /// Returns true if the accusation solved the case.
    pub fn correct(&self) -> bool {
        self.correct
    }

    /// Returns the match score.
    pub fn percentage(&self) -> Percentage {
        self.percentage
    }

    /// Returns the evaluator's written feedback.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}
