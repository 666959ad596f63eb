//! Case Generator Port - produces a new mystery case.

use async_trait::async_trait;

use crate::domain::case::{Case, Difficulty};
use crate::ports::ServiceError;

/// Port for producing a fresh case at a requested difficulty.
///
/// Live implementations ask a language model to author the case;
/// the offline implementation draws from a static casebook. A live
/// implementation returning a case of a different difficulty is a
/// contract violation.
#[async_trait]
pub trait CaseGenerator: Send + Sync {
    /// Generates one case for the requested difficulty.
    async fn generate(&self, difficulty: Difficulty) -> Result<Case, ServiceError>;
}
