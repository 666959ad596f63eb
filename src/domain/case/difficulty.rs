//! Case difficulty levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed pool of preset interrogation prompts.
///
/// The prompts offered for a session are a prefix of this list whose
/// length depends only on the difficulty, so two sessions at the same
/// difficulty always see the same prompts regardless of case content.
const PRESET_QUESTIONS: [&str; 5] = [
    "你最后一次见到死者是什么时候？",
    "案发当晚10点，你在哪里？",
    "你好像隐瞒了什么秘密？",
    "你和死者之间有什么矛盾吗？",
    "有谁能证明你说的话吗？",
];

/// Difficulty of a generated case.
///
/// Difficulty selects which offline cases are eligible and how many
/// preset interrogation prompts the player is offered per suspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// 简单
    Easy,
    /// 普通
    #[default]
    Medium,
    /// 困难
    Hard,
}

impl Difficulty {
    /// All difficulties, in ascending order.
    pub fn all() -> [Self; 3] {
        [Self::Easy, Self::Medium, Self::Hard]
    }

    /// Returns the localized label shown to the player and used in
    /// authored case data.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "简单",
            Self::Medium => "普通",
            Self::Hard => "困难",
        }
    }

    /// Number of preset interrogation prompts offered per suspect.
    pub fn preset_question_count(&self) -> usize {
        match self {
            Self::Easy => 3,
            Self::Medium => 4,
            Self::Hard => 5,
        }
    }

    /// Preset interrogation prompts for this difficulty.
    pub fn preset_questions(&self) -> &'static [&'static str] {
        &PRESET_QUESTIONS[..self.preset_question_count()]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_difficulty_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn labels_are_localized() {
        assert_eq!(Difficulty::Easy.label(), "简单");
        assert_eq!(Difficulty::Medium.label(), "普通");
        assert_eq!(Difficulty::Hard.label(), "困难");
    }

    #[test]
    fn preset_question_counts_are_3_4_5() {
        assert_eq!(Difficulty::Easy.preset_question_count(), 3);
        assert_eq!(Difficulty::Medium.preset_question_count(), 4);
        assert_eq!(Difficulty::Hard.preset_question_count(), 5);
    }

    #[test]
    fn preset_questions_match_count() {
        for difficulty in Difficulty::all() {
            assert_eq!(
                difficulty.preset_questions().len(),
                difficulty.preset_question_count()
            );
        }
    }

    #[test]
    fn preset_questions_are_a_prefix_of_the_pool() {
        // Harder difficulties only add prompts, never change earlier ones
        let easy = Difficulty::Easy.preset_questions();
        let hard = Difficulty::Hard.preset_questions();
        assert_eq!(&hard[..easy.len()], easy);
    }

    #[test]
    fn preset_questions_depend_on_difficulty_alone() {
        assert_eq!(
            Difficulty::Medium.preset_questions(),
            Difficulty::Medium.preset_questions()
        );
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&Difficulty::Easy).unwrap();
        assert_eq!(json, "\"easy\"");
    }

    #[test]
    fn deserializes_from_snake_case() {
        let difficulty: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(difficulty, Difficulty::Hard);
    }
}
