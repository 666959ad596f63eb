//! Interrogator Port - produces a suspect's next reply.

use async_trait::async_trait;

use crate::domain::case::{Case, Suspect};
use crate::domain::session::Message;
use crate::ports::ServiceError;

/// Port for answering one interrogation turn in character.
///
/// `history` is the suspect's full chat thread including the player
/// message that triggered this call (the optimistic append), so
/// implementations see the query both in context and as `query`.
#[async_trait]
pub trait Interrogator: Send + Sync {
    /// Produces the suspect's reply to the player's query.
    async fn interrogate(
        &self,
        case: &Case,
        suspect: &Suspect,
        history: &[Message],
        query: &str,
    ) -> Result<String, ServiceError>;
}
