//! Solution Evaluator Port - scores the player's accusation.

use async_trait::async_trait;

use crate::domain::case::Case;
use crate::domain::session::Verdict;
use crate::ports::ServiceError;

/// Port for judging an accusation statement against the case's
/// hidden solution.
#[async_trait]
pub trait SolutionEvaluator: Send + Sync {
    /// Scores the composed accusation statement.
    async fn evaluate(&self, case: &Case, statement: &str) -> Result<Verdict, ServiceError>;
}
