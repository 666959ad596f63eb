//! Game driver - the player-facing operations.
//!
//! Owns one [`GameSession`] and the service bindings, and mediates
//! every call into the external capabilities. Service failures are
//! converted here into either a silent fallback (already handled by
//! the binding decorators) or a localized banner; no raw service
//! error ever reaches the presentation layer.

use tracing::{debug, warn};

use crate::domain::case::Difficulty;
use crate::domain::foundation::{DomainError, ErrorCode, SuspectId};
use crate::domain::session::GameSession;
use crate::application::{ServiceBindings, ServiceMode};

/// Banner shown when case generation (including its fallback) fails.
pub const GENERATION_FAILED_BANNER: &str = "启动失败，请检查网络设置。";

/// Banner shown when accusation evaluation fails.
pub const EVALUATION_FAILED_BANNER: &str = "提交失败，请重试。";

/// One game instance: session state plus capability bindings.
///
/// All operations are driven by discrete player actions; each
/// triggers at most one outstanding service call, and the session's
/// per-suspect pending flags refuse overlapping sends. Handled
/// service failures record a banner on the session and return `Ok`;
/// `Err` is reserved for precondition failures, which leave the
/// session untouched.
pub struct Game {
    session: GameSession,
    services: ServiceBindings,
}

impl Game {
    /// Creates a game in the given service mode.
    pub fn new(mode: ServiceMode) -> Self {
        Self::with_services(mode.bind())
    }

    /// Creates a game over explicit service bindings.
    pub fn with_services(services: ServiceBindings) -> Self {
        Self {
            session: GameSession::new(),
            services,
        }
    }

    /// Read access to the session state for the presentation layer.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Preset interrogation prompts for the session's difficulty.
    pub fn preset_questions(&self) -> &'static [&'static str] {
        self.session.difficulty().preset_questions()
    }

    /// Starts a new game: generates a case and opens the dashboard.
    ///
    /// On generation failure the session returns to the menu with a
    /// banner and no partial case state.
    pub async fn start_game(&mut self, difficulty: Difficulty) -> Result<(), DomainError> {
        self.session.begin_case_generation(difficulty)?;

        match self.services.generator.generate(difficulty).await {
            Ok(case) => {
                debug!(title = case.title(), "case ready");
                self.session.install_case(case)
            }
            Err(err) => {
                warn!(error = %err, "case generation failed");
                self.session.fail_case_generation(GENERATION_FAILED_BANNER)
            }
        }
    }

    /// Opens the interrogation view for one suspect.
    pub fn select_suspect(&mut self, id: &SuspectId) -> Result<(), DomainError> {
        self.session.select_suspect(id)
    }

    /// Returns from interrogation or accusation to the dashboard.
    pub fn back_to_dashboard(&mut self) -> Result<(), DomainError> {
        self.session.return_to_dashboard()
    }

    /// Sends one interrogation query to the selected suspect.
    ///
    /// The player's message is appended before the service call so
    /// the UI can show it immediately. A failed reply leaves that
    /// message in place and simply produces no answer for this turn.
    pub async fn send_message(&mut self, text: &str) -> Result<(), DomainError> {
        let suspect_id = self.session.record_player_query(text)?;

        let reply = {
            let case = self
                .session
                .case()
                .ok_or_else(|| DomainError::new(ErrorCode::NoActiveCase, "No case is active"))?;
            let suspect = case.suspect(&suspect_id).ok_or_else(|| {
                DomainError::new(ErrorCode::SuspectNotFound, "Selected suspect vanished")
            })?;
            let history = self.session.ledger().messages(&suspect_id).unwrap_or(&[]);
            self.services
                .interrogator
                .interrogate(case, suspect, history, text)
                .await
        };

        match reply {
            Ok(content) => self.session.record_suspect_reply(&suspect_id, content),
            Err(err) => {
                // Lenient policy: keep the player's message, drop the turn
                warn!(error = %err, suspect = suspect_id.as_str(), "no reply this turn");
                self.session.fail_suspect_reply(&suspect_id)
            }
        }
    }

    /// Opens the accusation screen once every suspect is interrogated.
    pub fn open_solving(&mut self) -> Result<(), DomainError> {
        self.session.begin_solving()
    }

    /// Selects the suspect to accuse.
    pub fn accuse(&mut self, id: &SuspectId) -> Result<(), DomainError> {
        self.session.accuse(id)
    }

    /// Sets the freeform motive text.
    pub fn set_motive(&mut self, motive: &str) -> Result<(), DomainError> {
        self.session.set_motive(motive)
    }

    /// Submits the accusation for evaluation.
    ///
    /// On evaluation failure the session returns to the accusation
    /// screen with a banner; the selection and motive survive so the
    /// player can resubmit.
    pub async fn submit_accusation(&mut self) -> Result<(), DomainError> {
        let statement = self.session.begin_evaluation()?;

        let verdict = {
            let case = self
                .session
                .case()
                .ok_or_else(|| DomainError::new(ErrorCode::NoActiveCase, "No case is active"))?;
            self.services.evaluator.evaluate(case, &statement).await
        };

        match verdict {
            Ok(verdict) => self.session.install_verdict(verdict),
            Err(err) => {
                warn!(error = %err, "accusation evaluation failed");
                self.session.fail_evaluation(EVALUATION_FAILED_BANNER)
            }
        }
    }

    /// Returns to the menu, discarding all session data.
    pub fn reset(&mut self) -> Result<(), DomainError> {
        self.session.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockCaseGenerator, MockEvaluator, MockInterrogator};
    use crate::adapters::offline::Casebook;
    use crate::domain::foundation::Percentage;
    use crate::domain::session::{GamePhase, Verdict};
    use std::sync::Arc;

    fn sid(id: &str) -> SuspectId {
        SuspectId::new(id).unwrap()
    }

    fn easy_case() -> crate::domain::case::Case {
        Casebook::builtin().pick(Difficulty::Easy).unwrap()
    }

    fn mock_game(
        generator: MockCaseGenerator,
        interrogator: MockInterrogator,
        evaluator: MockEvaluator,
    ) -> Game {
        Game::with_services(ServiceBindings::new(
            Arc::new(generator),
            Arc::new(interrogator),
            Arc::new(evaluator),
        ))
    }

    #[tokio::test]
    async fn start_game_installs_the_generated_case() {
        let mut game = mock_game(
            MockCaseGenerator::new().with_case(easy_case()),
            MockInterrogator::new(),
            MockEvaluator::new(),
        );

        game.start_game(Difficulty::Easy).await.unwrap();

        assert_eq!(game.session().phase(), GamePhase::Dashboard);
        assert_eq!(game.session().total_suspect_count(), 3);
        assert!(game.session().banner().is_none());
    }

    #[tokio::test]
    async fn start_game_failure_returns_to_menu_with_banner() {
        let mut game = mock_game(
            MockCaseGenerator::new(),
            MockInterrogator::new(),
            MockEvaluator::new(),
        );

        game.start_game(Difficulty::Easy).await.unwrap();

        assert_eq!(game.session().phase(), GamePhase::Menu);
        assert_eq!(game.session().banner(), Some(GENERATION_FAILED_BANNER));
        assert!(game.session().case().is_none());
    }

    #[tokio::test]
    async fn send_message_passes_history_including_the_query() {
        let interrogator = MockInterrogator::new()
            .with_reply("我在餐车表演。")
            .with_reply("问这个干什么？");
        let mut game = mock_game(
            MockCaseGenerator::new().with_case(easy_case()),
            interrogator.clone(),
            MockEvaluator::new(),
        );

        game.start_game(Difficulty::Easy).await.unwrap();
        game.select_suspect(&sid("t1")).unwrap();
        game.send_message("你在哪里？").await.unwrap();
        game.send_message("你缺钱吗？").await.unwrap();

        assert_eq!(interrogator.queries(), vec!["你在哪里？", "你缺钱吗？"]);
        let messages = game.session().ledger().messages(&sid("t1")).unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].content(), "我在餐车表演。");
        assert_eq!(messages[3].content(), "问这个干什么？");
    }

    #[tokio::test]
    async fn failed_reply_is_lenient_and_clears_pending() {
        let mut game = mock_game(
            MockCaseGenerator::new().with_case(easy_case()),
            MockInterrogator::new(),
            MockEvaluator::new(),
        );

        game.start_game(Difficulty::Easy).await.unwrap();
        game.select_suspect(&sid("t1")).unwrap();
        game.send_message("你在哪里？").await.unwrap();

        let messages = game.session().ledger().messages(&sid("t1")).unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_player());
        assert!(!game.session().is_reply_pending(&sid("t1")));
        // No banner: interrogation failures are never surfaced
        assert!(game.session().banner().is_none());
    }

    #[tokio::test]
    async fn evaluation_failure_returns_to_solving_with_banner() {
        let interrogator = MockInterrogator::new()
            .with_reply("回答一")
            .with_reply("回答二")
            .with_reply("回答三");
        let mut game = mock_game(
            MockCaseGenerator::new().with_case(easy_case()),
            interrogator,
            MockEvaluator::new(),
        );

        game.start_game(Difficulty::Easy).await.unwrap();
        for id in ["t1", "t2", "t3"] {
            game.select_suspect(&sid(id)).unwrap();
            game.send_message("你在哪里？").await.unwrap();
            game.back_to_dashboard().unwrap();
        }
        game.open_solving().unwrap();
        game.accuse(&sid("t1")).unwrap();
        game.set_motive("密室机关。").unwrap();

        game.submit_accusation().await.unwrap();

        assert_eq!(game.session().phase(), GamePhase::Solving);
        assert_eq!(game.session().banner(), Some(EVALUATION_FAILED_BANNER));
        assert_eq!(game.session().accusation().accused(), Some(&sid("t1")));
        assert_eq!(game.session().accusation().motive(), "密室机关。");
    }

    #[tokio::test]
    async fn successful_evaluation_reaches_the_result_screen() {
        let interrogator = MockInterrogator::new()
            .with_reply("回答一")
            .with_reply("回答二")
            .with_reply("回答三");
        let evaluator = MockEvaluator::new()
            .with_verdict(Verdict::from_score(Percentage::new(95), "推理严密。"));
        let mut game = mock_game(
            MockCaseGenerator::new().with_case(easy_case()),
            interrogator,
            evaluator.clone(),
        );

        game.start_game(Difficulty::Easy).await.unwrap();
        for id in ["t1", "t2", "t3"] {
            game.select_suspect(&sid(id)).unwrap();
            game.send_message("你在哪里？").await.unwrap();
            game.back_to_dashboard().unwrap();
        }
        game.open_solving().unwrap();
        game.accuse(&sid("t1")).unwrap();
        game.submit_accusation().await.unwrap();

        assert_eq!(game.session().phase(), GamePhase::Result);
        assert!(game.session().verdict().unwrap().correct());
        assert_eq!(
            evaluator.statements(),
            vec!["I accuse 赵魔术师. Motive/Method: Based on the evidence found."]
        );
    }

    #[tokio::test]
    async fn preset_questions_follow_session_difficulty() {
        let mut game = mock_game(
            MockCaseGenerator::new().with_case(easy_case()),
            MockInterrogator::new(),
            MockEvaluator::new(),
        );
        assert_eq!(game.preset_questions().len(), 4); // default medium

        game.start_game(Difficulty::Easy).await.unwrap();
        assert_eq!(game.preset_questions().len(), 3);
    }
}
