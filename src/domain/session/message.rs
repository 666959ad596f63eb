//! Message entity for interrogation chats.
//!
//! Messages are immutable records of player/suspect exchanges.
//! Ordering within a suspect's ledger is insertion order; global
//! ordering across suspects is not required.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, MessageId, Timestamp};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The detective (the player).
    Player,
    /// The suspect being interrogated.
    Suspect,
    /// Narration or service notices.
    System,
}

/// An immutable message within a suspect's chat ledger.
///
/// # Invariants
///
/// - `content` is non-empty (validated at construction)
/// - `timestamp` is set at construction and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    sender: Sender,
    content: String,
    timestamp: Timestamp,
}

impl Message {
    /// Creates a new message with the given sender and content.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if content is empty
    pub fn new(sender: Sender, content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::validation(
                "content",
                "Message content cannot be empty",
            ));
        }

        Ok(Self {
            id: MessageId::new(),
            sender,
            content,
            timestamp: Timestamp::now(),
        })
    }

    /// Creates a player message.
    pub fn player(content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Sender::Player, content)
    }

    /// Creates a suspect message.
    pub fn suspect(content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Sender::Suspect, content)
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Sender::System, content)
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Returns true if this message is from the player.
    pub fn is_player(&self) -> bool {
        self.sender == Sender::Player
    }

    /// Returns true if this message is from the suspect.
    pub fn is_suspect(&self) -> bool {
        self.sender == Sender::Suspect
    }
}
