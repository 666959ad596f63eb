//! Game phase state machine.
//!
//! Defines the six mutually exclusive session phases and the valid
//! transitions between them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The current phase of a game session.
///
/// The happy path runs `Menu → Loading → Dashboard → Interrogation →
/// Solving → Result`. `Loading` is transient: it is entered from
/// `Menu` while a case is generated and from `Solving` while an
/// accusation is evaluated, and on failure falls back to the phase it
/// was entered from. `Result` always offers a reset back to `Menu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Title screen; difficulty selection.
    #[default]
    Menu,

    /// Awaiting an external service (case generation or evaluation).
    Loading,

    /// Case overview; suspect selection.
    Dashboard,

    /// Chatting with one selected suspect.
    Interrogation,

    /// Choosing the culprit and entering a motive.
    Solving,

    /// Verdict display.
    Result,
}

impl GamePhase {
    /// Returns true while an external service call is outstanding.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true for phases that always have an active case.
    ///
    /// `Loading` is excluded: it has a case only when entered from
    /// `Solving`.
    pub fn has_active_case(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Interrogation | Self::Solving | Self::Result)
    }
}

impl StateMachine for GamePhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use GamePhase::*;
        matches!(
            (self, target),
            // Case generation
            (Menu, Loading) |
            (Loading, Dashboard) |
            // Generation failure falls back to the menu
            (Loading, Menu) |
            // Investigation loop
            (Dashboard, Interrogation) |
            (Interrogation, Dashboard) |
            // Accusation, once every suspect has been interrogated
            (Dashboard, Solving) |
            (Solving, Dashboard) |
            (Solving, Loading) |
            (Loading, Result) |
            // Evaluation failure returns to the accusation screen
            (Loading, Solving) |
            // Reset
            (Result, Menu)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use GamePhase::*;
        match self {
            Menu => vec![Loading],
            Loading => vec![Dashboard, Menu, Result, Solving],
            Dashboard => vec![Interrogation, Solving],
            Interrogation => vec![Dashboard],
            Solving => vec![Dashboard, Loading],
            Result => vec![Menu],
        }
    }
}
