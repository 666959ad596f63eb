//! Case aggregate - one mystery scenario.

use serde::{Deserialize, Serialize};

use crate::domain::case::{Difficulty, Suspect};
use crate::domain::foundation::{SuspectId, ValidationError};

/// One generated or pre-authored mystery scenario.
///
/// Immutable once created; the session owns it exclusively and
/// discards it on return to the menu.
///
/// # Invariants
///
/// - at least one suspect
/// - suspect ids are unique within the case
/// - `solution` is the hidden ground truth, revealed only on the
///   result screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    title: String,
    introduction: String,
    solution: String,
    difficulty: Difficulty,
    suspects: Vec<Suspect>,
}

impl Case {
    /// Creates a case, validating the suspect list.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title or suspect list is empty
    /// - `InvalidFormat` if two suspects share an id
    pub fn new(
        title: impl Into<String>,
        introduction: impl Into<String>,
        solution: impl Into<String>,
        difficulty: Difficulty,
        suspects: Vec<Suspect>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if suspects.is_empty() {
            return Err(ValidationError::empty_field("suspects"));
        }
        for (i, suspect) in suspects.iter().enumerate() {
            if suspects[..i].iter().any(|s| s.id() == suspect.id()) {
                return Err(ValidationError::invalid_format(
                    "suspects",
                    format!("duplicate suspect id '{}'", suspect.id()),
                ));
            }
        }

        Ok(Self {
            title,
            introduction: introduction.into(),
            solution: solution.into(),
            difficulty,
            suspects,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn introduction(&self) -> &str {
        &self.introduction
    }

    /// The hidden ground truth used for role-play guidance and scoring.
    pub fn solution(&self) -> &str {
        &self.solution
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn suspects(&self) -> &[Suspect] {
        &self.suspects
    }

    pub fn suspect_count(&self) -> usize {
        self.suspects.len()
    }

    /// Finds a suspect by id.
    pub fn suspect(&self, id: &SuspectId) -> Option<&Suspect> {
        self.suspects.iter().find(|s| s.id() == id)
    }

    /// Returns true if the suspect belongs to this case.
    pub fn contains(&self, id: &SuspectId) -> bool {
        self.suspect(id).is_some()
    }

    /// Iterates over the suspect ids in case order.
    pub fn suspect_ids(&self) -> impl Iterator<Item = &SuspectId> {
        self.suspects.iter().map(|s| s.id())
    }
}
