//! Fallback decorators - absorb live failures into offline behavior.
//!
//! Each decorator wraps a live capability and substitutes the
//! deterministic offline implementation when the live call fails, so
//! no raw service error ever reaches the session core through these
//! paths. The underlying error is logged, never shown to the player.
//!
//! # Example
//!
//! ```ignore
//! let live = Arc::new(GeminiClient::new(config));
//! let generator = FallbackCaseGenerator::new(live, Casebook::builtin());
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::adapters::offline::{Casebook, HeuristicEvaluator, KeywordResolver};
use crate::domain::case::{Case, Difficulty, Suspect};
use crate::domain::session::{Message, Verdict};
use crate::ports::{CaseGenerator, Interrogator, ServiceError, SolutionEvaluator};

/// Case generator with casebook fallback.
///
/// Still fails if the fallback pool itself is empty; that defensive
/// path is surfaced to the player as a generation banner.
pub struct FallbackCaseGenerator {
    primary: Arc<dyn CaseGenerator>,
    fallback: Casebook,
}

impl FallbackCaseGenerator {
    /// Wraps a live generator with a casebook fallback.
    pub fn new(primary: Arc<dyn CaseGenerator>, fallback: Casebook) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl CaseGenerator for FallbackCaseGenerator {
    async fn generate(&self, difficulty: Difficulty) -> Result<Case, ServiceError> {
        match self.primary.generate(difficulty).await {
            Ok(case) => Ok(case),
            Err(err) => {
                warn!(error = %err, "live case generation failed, drawing from casebook");
                self.fallback.pick(difficulty)
            }
        }
    }
}

/// Interrogator with keyword-resolver fallback. Never fails.
pub struct FallbackInterrogator {
    primary: Arc<dyn Interrogator>,
    fallback: KeywordResolver,
}

impl FallbackInterrogator {
    /// Wraps a live interrogator with the keyword resolver.
    pub fn new(primary: Arc<dyn Interrogator>, fallback: KeywordResolver) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl Interrogator for FallbackInterrogator {
    async fn interrogate(
        &self,
        case: &Case,
        suspect: &Suspect,
        history: &[Message],
        query: &str,
    ) -> Result<String, ServiceError> {
        match self.primary.interrogate(case, suspect, history, query).await {
            Ok(reply) => Ok(reply),
            Err(err) => {
                warn!(
                    error = %err,
                    suspect = suspect.id().as_str(),
                    "live interrogation failed, using keyword resolver"
                );
                Ok(self.fallback.respond(suspect, query))
            }
        }
    }
}

/// Evaluator with substring-heuristic fallback. Never fails.
pub struct FallbackEvaluator {
    primary: Arc<dyn SolutionEvaluator>,
    fallback: HeuristicEvaluator,
}

impl FallbackEvaluator {
    /// Wraps a live evaluator with the substring heuristic.
    pub fn new(primary: Arc<dyn SolutionEvaluator>, fallback: HeuristicEvaluator) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl SolutionEvaluator for FallbackEvaluator {
    async fn evaluate(&self, case: &Case, statement: &str) -> Result<Verdict, ServiceError> {
        match self.primary.evaluate(case, statement).await {
            Ok(verdict) => Ok(verdict),
            Err(err) => {
                warn!(error = %err, "live evaluation failed, using offline heuristic");
                Ok(self.fallback.judge(case, statement))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockCaseGenerator, MockEvaluator, MockInterrogator};
    use crate::domain::foundation::Percentage;

    fn easy_case() -> Case {
        Casebook::builtin().pick(Difficulty::Easy).unwrap()
    }

    #[tokio::test]
    async fn generator_prefers_the_live_case() {
        let live_case = easy_case();
        let primary = Arc::new(MockCaseGenerator::new().with_case(live_case.clone()));
        let generator = FallbackCaseGenerator::new(primary, Casebook::builtin());

        let case = generator.generate(Difficulty::Easy).await.unwrap();
        assert_eq!(case, live_case);
    }

    #[tokio::test]
    async fn generator_falls_back_to_casebook_on_failure() {
        let primary = Arc::new(MockCaseGenerator::new().with_error(ServiceError::unavailable("down")));
        let generator = FallbackCaseGenerator::new(primary, Casebook::builtin());

        let case = generator.generate(Difficulty::Easy).await.unwrap();
        assert_eq!(case.title(), "列车迷影");
    }

    #[tokio::test]
    async fn generator_fails_when_fallback_pool_is_empty() {
        let primary = Arc::new(MockCaseGenerator::new().with_error(ServiceError::unavailable("down")));
        let generator = FallbackCaseGenerator::new(primary, Casebook::new(vec![]));

        let result = generator.generate(Difficulty::Easy).await;
        assert!(matches!(result, Err(ServiceError::EmptyCasePool)));
    }

    #[tokio::test]
    async fn interrogator_falls_back_to_keyword_resolver() {
        let primary = Arc::new(MockInterrogator::new().with_error(ServiceError::network("timeout")));
        let interrogator = FallbackInterrogator::new(primary, KeywordResolver::new());

        let case = easy_case();
        let suspect = &case.suspects()[0];
        let reply = interrogator
            .interrogate(&case, suspect, &[], "案发时你在哪里？")
            .await
            .unwrap();

        assert_eq!(reply, "我在餐车为几位美丽的女士表演纸牌魔术，很多人可以作证。");
    }

    #[tokio::test]
    async fn interrogator_prefers_the_live_reply() {
        let primary = Arc::new(MockInterrogator::new().with_reply("哼，我不会说的。"));
        let interrogator = FallbackInterrogator::new(primary, KeywordResolver::new());

        let case = easy_case();
        let suspect = &case.suspects()[0];
        let reply = interrogator
            .interrogate(&case, suspect, &[], "案发时你在哪里？")
            .await
            .unwrap();

        assert_eq!(reply, "哼，我不会说的。");
    }

    #[tokio::test]
    async fn evaluator_falls_back_to_heuristic() {
        let primary = Arc::new(MockEvaluator::new().with_error(ServiceError::rate_limited(30)));
        let evaluator = FallbackEvaluator::new(primary, HeuristicEvaluator::new());

        let case = easy_case();
        let verdict = evaluator
            .evaluate(&case, "I accuse 赵魔术师. Motive/Method: 密室机关。")
            .await
            .unwrap();

        assert!(verdict.correct());
        assert_eq!(verdict.percentage().value(), 90);
    }

    #[tokio::test]
    async fn evaluator_prefers_the_live_verdict() {
        let live = Verdict::from_score(Percentage::new(85), "推理严密。");
        let primary = Arc::new(MockEvaluator::new().with_verdict(live.clone()));
        let evaluator = FallbackEvaluator::new(primary, HeuristicEvaluator::new());

        let verdict = evaluator.evaluate(&easy_case(), "指认").await.unwrap();
        assert_eq!(verdict, live);
    }
}
