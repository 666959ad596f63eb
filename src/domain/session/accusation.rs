//! Accusation state - the player's final answer.

use serde::{Deserialize, Serialize};

use crate::domain::case::Case;
use crate::domain::foundation::SuspectId;

/// Default motive text when the player leaves the motive field empty.
pub const DEFAULT_MOTIVE: &str = "Based on the evidence found.";

/// The player's choice of culprit plus optional freeform reasoning.
///
/// Transient: reset whenever the session returns to the menu, and
/// preserved across a failed evaluation so the player can resubmit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accusation {
    accused: Option<SuspectId>,
    motive: String,
}

impl Accusation {
    /// Creates an empty accusation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accused suspect, if one has been selected.
    pub fn accused(&self) -> Option<&SuspectId> {
        self.accused.as_ref()
    }

    /// Returns the freeform motive text (possibly empty).
    pub fn motive(&self) -> &str {
        &self.motive
    }

    /// Selects the accused suspect.
    pub fn accuse(&mut self, id: SuspectId) {
        self.accused = Some(id);
    }

    /// Sets the freeform motive text.
    pub fn set_motive(&mut self, motive: impl Into<String>) {
        self.motive = motive.into();
    }

    /// Clears selection and motive.
    pub fn clear(&mut self) {
        self.accused = None;
        self.motive.clear();
    }

    /// Composes the solution statement submitted to the evaluator.
    ///
    /// Combines the accused suspect's name with the motive text,
    /// substituting [`DEFAULT_MOTIVE`] when the motive is empty.
    /// Returns `None` if no suspect is accused or the accused does not
    /// belong to the case.
    pub fn statement(&self, case: &Case) -> Option<String> {
        let accused = self.accused.as_ref()?;
        let suspect = case.suspect(accused)?;
        let motive = if self.motive.trim().is_empty() {
            DEFAULT_MOTIVE
        } else {
            self.motive.as_str()
        };
        Some(format!(
            "I accuse {}. Motive/Method: {}",
            suspect.name(),
            motive
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::case::{Difficulty, Suspect};

    fn case() -> Case {
        Case::new(
            "豪门惊梦",
            "案情",
            "李大小姐",
            Difficulty::Medium,
            vec![Suspect::new(
                SuspectId::new("s2").unwrap(),
                "李大小姐",
                "女儿",
                "描述",
                "lady",
                "秘密",
                "性格",
            )],
        )
        .unwrap()
    }

    #[test]
    fn empty_accusation_has_no_statement() {
        let accusation = Accusation::new();
        assert!(accusation.accused().is_none());
        assert!(accusation.statement(&case()).is_none());
    }

    #[test]
    fn statement_uses_default_motive_when_empty() {
        let mut accusation = Accusation::new();
        accusation.accuse(SuspectId::new("s2").unwrap());

        assert_eq!(
            accusation.statement(&case()).unwrap(),
            "I accuse 李大小姐. Motive/Method: Based on the evidence found."
        );
    }

    #[test]
    fn statement_includes_player_motive() {
        let mut accusation = Accusation::new();
        accusation.accuse(SuspectId::new("s2").unwrap());
        accusation.set_motive("取出了电子钟的电池，制造时间假象。");

        assert_eq!(
            accusation.statement(&case()).unwrap(),
            "I accuse 李大小姐. Motive/Method: 取出了电子钟的电池，制造时间假象。"
        );
    }

    #[test]
    fn statement_is_none_for_foreign_suspect() {
        let mut accusation = Accusation::new();
        accusation.accuse(SuspectId::new("s9").unwrap());
        assert!(accusation.statement(&case()).is_none());
    }

    #[test]
    fn clear_resets_selection_and_motive() {
        let mut accusation = Accusation::new();
        accusation.accuse(SuspectId::new("s2").unwrap());
        accusation.set_motive("动机");
        accusation.clear();

        assert!(accusation.accused().is_none());
        assert_eq!(accusation.motive(), "");
    }
}
