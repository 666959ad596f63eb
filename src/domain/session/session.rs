//! GameSession aggregate - the session/phase state machine.
//!
//! Owns the current phase, the active case, the per-suspect chat
//! ledgers, the accusation, and the verdict. Every mutation passes
//! through a validated method here; precondition failures return an
//! error without touching state, so callers can treat them as refused
//! no-ops.

use crate::domain::case::{Case, Difficulty};
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine, SuspectId};
use crate::domain::session::{Accusation, ChatLedger, GamePhase, Message, Verdict};

/// One play-through of the game, from menu to verdict and back.
///
/// The session is driven by discrete player actions; the async
/// orchestration that calls external services lives in the
/// application layer and feeds results back in through the
/// `install_*` / `fail_*` methods. At most one reply may be
/// outstanding per suspect (tracked in the ledger).
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    phase: GamePhase,
    difficulty: Difficulty,
    case: Option<Case>,
    ledger: ChatLedger,
    selected_suspect: Option<SuspectId>,
    accusation: Accusation,
    verdict: Option<Verdict>,
    banner: Option<String>,
}

impl GameSession {
    /// Creates a session at the menu with default difficulty.
    pub fn new() -> Self {
        Self::default()
    }

    // === Accessors ===

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn case(&self) -> Option<&Case> {
        self.case.as_ref()
    }

    pub fn ledger(&self) -> &ChatLedger {
        &self.ledger
    }

    pub fn selected_suspect(&self) -> Option<&SuspectId> {
        self.selected_suspect.as_ref()
    }

    pub fn accusation(&self) -> &Accusation {
        &self.accusation
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Transient user-facing failure message, if any.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Number of suspects with a non-empty chat thread.
    pub fn interrogated_count(&self) -> usize {
        self.ledger.interrogated_count()
    }

    /// Number of suspects in the active case.
    pub fn total_suspect_count(&self) -> usize {
        self.case.as_ref().map_or(0, Case::suspect_count)
    }

    /// Returns true once every suspect has been interrogated, making
    /// the accusation screen reachable.
    pub fn can_solve(&self) -> bool {
        self.ledger.all_interrogated()
    }

    /// Returns true while a reply from this suspect is outstanding.
    pub fn is_reply_pending(&self, id: &SuspectId) -> bool {
        self.ledger.is_awaiting(id)
    }

    // === Case generation ===

    /// Leaves the menu to generate a case at the given difficulty.
    pub fn begin_case_generation(&mut self, difficulty: Difficulty) -> Result<(), DomainError> {
        if self.phase != GamePhase::Menu {
            return Err(self.invalid_transition(GamePhase::Loading));
        }
        self.transition(GamePhase::Loading)?;
        self.difficulty = difficulty;
        self.banner = None;
        Ok(())
    }

    /// Installs a freshly generated case and opens the dashboard.
    ///
    /// Initializes one empty chat thread per suspect and clears any
    /// stale accusation or verdict.
    pub fn install_case(&mut self, case: Case) -> Result<(), DomainError> {
        if self.phase != GamePhase::Loading || self.case.is_some() {
            return Err(self.invalid_transition(GamePhase::Dashboard));
        }
        self.transition(GamePhase::Dashboard)?;
        self.ledger = ChatLedger::for_case(&case);
        self.case = Some(case);
        self.selected_suspect = None;
        self.accusation.clear();
        self.verdict = None;
        tracing::debug!(suspects = self.ledger.suspect_count(), "case installed");
        Ok(())
    }

    /// Records a failed case generation and returns to the menu.
    ///
    /// No partial case state is retained.
    pub fn fail_case_generation(&mut self, banner: impl Into<String>) -> Result<(), DomainError> {
        if self.phase != GamePhase::Loading || self.case.is_some() {
            return Err(self.invalid_transition(GamePhase::Menu));
        }
        self.transition(GamePhase::Menu)?;
        self.banner = Some(banner.into());
        Ok(())
    }

    // === Interrogation ===

    /// Opens the interrogation view for one suspect of the active case.
    ///
    /// Selecting does not count as interrogating; the ledger is not
    /// touched.
    pub fn select_suspect(&mut self, id: &SuspectId) -> Result<(), DomainError> {
        if self.phase != GamePhase::Dashboard {
            return Err(self.invalid_transition(GamePhase::Interrogation));
        }
        let case = self.case.as_ref().ok_or_else(Self::no_active_case)?;
        if !case.contains(id) {
            return Err(DomainError::new(
                ErrorCode::SuspectNotFound,
                "Suspect does not belong to the active case",
            )
            .with_detail("suspect_id", id.as_str()));
        }
        self.transition(GamePhase::Interrogation)?;
        self.selected_suspect = Some(id.clone());
        Ok(())
    }

    /// Returns from interrogation or accusation to the dashboard.
    pub fn return_to_dashboard(&mut self) -> Result<(), DomainError> {
        if !matches!(self.phase, GamePhase::Interrogation | GamePhase::Solving) {
            return Err(self.invalid_transition(GamePhase::Dashboard));
        }
        self.transition(GamePhase::Dashboard)?;
        self.selected_suspect = None;
        Ok(())
    }

    /// Appends the player's query to the selected suspect's thread and
    /// marks it awaiting a reply (the optimistic update).
    ///
    /// Returns the id of the suspect the query targets.
    ///
    /// # Errors
    ///
    /// - `NoSuspectSelected` outside an interrogation
    /// - `ValidationFailed` for empty text
    /// - `ReplyPending` while a reply for this suspect is outstanding
    pub fn record_player_query(&mut self, text: &str) -> Result<SuspectId, DomainError> {
        if self.phase != GamePhase::Interrogation {
            return Err(DomainError::new(
                ErrorCode::NoSuspectSelected,
                "No interrogation in progress",
            ));
        }
        self.case.as_ref().ok_or_else(Self::no_active_case)?;
        let id = self
            .selected_suspect
            .clone()
            .ok_or_else(|| DomainError::new(ErrorCode::NoSuspectSelected, "No suspect selected"))?;

        let message = Message::player(text)?;
        self.ledger.begin_awaiting(&id)?;
        self.ledger.append(&id, message)?;
        Ok(id)
    }

    /// Appends a suspect reply and clears the pending flag.
    pub fn record_suspect_reply(
        &mut self,
        id: &SuspectId,
        content: impl Into<String>,
    ) -> Result<(), DomainError> {
        if !self.ledger.is_awaiting(id) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "No reply is pending for this suspect",
            )
            .with_detail("suspect_id", id.as_str()));
        }
        let message = Message::suspect(content)?;
        self.ledger.append(id, message)?;
        self.ledger.end_awaiting(id)
    }

    /// Records that no reply could be produced for an outstanding query.
    ///
    /// The player's message stays in the ledger; conversational
    /// continuity is preserved even when one turn fails.
    pub fn fail_suspect_reply(&mut self, id: &SuspectId) -> Result<(), DomainError> {
        self.ledger.end_awaiting(id)
    }

    // === Accusation ===

    /// Opens the accusation screen.
    ///
    /// Hard precondition: every suspect of the case must have been
    /// interrogated at least once.
    pub fn begin_solving(&mut self) -> Result<(), DomainError> {
        if self.phase != GamePhase::Dashboard {
            return Err(self.invalid_transition(GamePhase::Solving));
        }
        self.case.as_ref().ok_or_else(Self::no_active_case)?;
        if !self.ledger.all_interrogated() {
            return Err(DomainError::new(
                ErrorCode::InterrogationIncomplete,
                "Every suspect must be interrogated before accusing",
            )
            .with_detail("interrogated", self.interrogated_count().to_string())
            .with_detail("total", self.total_suspect_count().to_string()));
        }
        self.transition(GamePhase::Solving)
    }

    /// Selects the suspect to accuse.
    pub fn accuse(&mut self, id: &SuspectId) -> Result<(), DomainError> {
        if self.phase != GamePhase::Solving {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Accusation is only possible on the solving screen",
            ));
        }
        let case = self.case.as_ref().ok_or_else(Self::no_active_case)?;
        if !case.contains(id) {
            return Err(DomainError::new(
                ErrorCode::SuspectNotFound,
                "Accused suspect does not belong to the active case",
            )
            .with_detail("suspect_id", id.as_str()));
        }
        self.accusation.accuse(id.clone());
        Ok(())
    }

    /// Sets the freeform motive text of the accusation.
    pub fn set_motive(&mut self, motive: impl Into<String>) -> Result<(), DomainError> {
        if self.phase != GamePhase::Solving {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Motive can only be edited on the solving screen",
            ));
        }
        self.accusation.set_motive(motive);
        Ok(())
    }

    /// Submits the accusation for evaluation.
    ///
    /// Composes the solution statement from the accused suspect's name
    /// and the motive text, and enters `Loading` while the evaluator
    /// runs.
    ///
    /// # Errors
    ///
    /// - `NoAccusedSelected` if no suspect has been accused
    pub fn begin_evaluation(&mut self) -> Result<String, DomainError> {
        if self.phase != GamePhase::Solving {
            return Err(self.invalid_transition(GamePhase::Loading));
        }
        let case = self.case.as_ref().ok_or_else(Self::no_active_case)?;
        let statement = self.accusation.statement(case).ok_or_else(|| {
            DomainError::new(ErrorCode::NoAccusedSelected, "No suspect has been accused")
        })?;
        self.transition(GamePhase::Loading)?;
        self.banner = None;
        Ok(statement)
    }

    /// Installs the evaluation verdict and shows the result screen.
    pub fn install_verdict(&mut self, verdict: Verdict) -> Result<(), DomainError> {
        if self.phase != GamePhase::Loading
            || self.case.is_none()
            || self.accusation.accused().is_none()
        {
            return Err(self.invalid_transition(GamePhase::Result));
        }
        self.transition(GamePhase::Result)?;
        self.verdict = Some(verdict);
        Ok(())
    }

    /// Records a failed evaluation and returns to the accusation screen.
    ///
    /// The accusation selection and motive text are preserved so the
    /// player can resubmit without re-selecting.
    pub fn fail_evaluation(&mut self, banner: impl Into<String>) -> Result<(), DomainError> {
        if self.phase != GamePhase::Loading || self.accusation.accused().is_none() {
            return Err(self.invalid_transition(GamePhase::Solving));
        }
        self.transition(GamePhase::Solving)?;
        self.banner = Some(banner.into());
        Ok(())
    }

    // === Reset ===

    /// Returns to the menu, discarding all session data.
    pub fn reset(&mut self) -> Result<(), DomainError> {
        if self.phase != GamePhase::Result {
            return Err(self.invalid_transition(GamePhase::Menu));
        }
        self.transition(GamePhase::Menu)?;
        self.case = None;
        self.ledger = ChatLedger::new();
        self.selected_suspect = None;
        self.accusation.clear();
        self.verdict = None;
        self.banner = None;
        Ok(())
    }

    // === Private helpers ===

    fn transition(&mut self, target: GamePhase) -> Result<(), DomainError> {
        if !self.phase.can_transition_to(&target) {
            return Err(self.invalid_transition(target));
        }
        tracing::debug!(from = ?self.phase, to = ?target, "phase transition");
        self.phase = target;
        Ok(())
    }

    fn invalid_transition(&self, target: GamePhase) -> DomainError {
        DomainError::new(
            ErrorCode::InvalidStateTransition,
            format!("Cannot transition from {:?} to {:?}", self.phase, target),
        )
    }

    fn no_active_case() -> DomainError {
        DomainError::new(ErrorCode::NoActiveCase, "No case is active")
    }
}
