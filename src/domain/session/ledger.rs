//! Per-suspect chat ledgers.
//!
//! One ordered message thread per suspect in the active case, plus a
//! per-suspect pending-reply flag so one suspect's outstanding reply
//! cannot be misattributed to another.

use std::collections::BTreeMap;

use crate::domain::case::Case;
use crate::domain::foundation::{DomainError, ErrorCode, SuspectId};
use crate::domain::session::Message;

/// One suspect's conversation thread.
#[derive(Debug, Clone, Default)]
struct Thread {
    messages: Vec<Message>,
    awaiting_reply: bool,
}

/// The conversation ledgers for every suspect in the active case.
///
/// # Invariants
///
/// - every suspect id of the case has a thread (possibly empty) from
///   initialization onward
/// - appends are in insertion order; messages are never removed or
///   reordered
/// - a suspect is "interrogated" iff its thread is non-empty
#[derive(Debug, Clone, Default)]
pub struct ChatLedger {
    threads: BTreeMap<SuspectId, Thread>,
}

impl ChatLedger {
    /// Creates an empty ledger with no threads (no active case).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger with one empty thread per suspect of the case.
    pub fn for_case(case: &Case) -> Self {
        let threads = case
            .suspect_ids()
            .map(|id| (id.clone(), Thread::default()))
            .collect();
        Self { threads }
    }

    /// Returns the messages of a suspect's thread, if the suspect is known.
    pub fn messages(&self, id: &SuspectId) -> Option<&[Message]> {
        self.threads.get(id).map(|t| t.messages.as_slice())
    }

    /// Returns the number of messages in a suspect's thread.
    pub fn len(&self, id: &SuspectId) -> usize {
        self.threads.get(id).map_or(0, |t| t.messages.len())
    }

    /// Returns true if the ledger tracks no suspects at all.
    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    /// Returns true if the ledger has a thread for this suspect.
    pub fn contains(&self, id: &SuspectId) -> bool {
        self.threads.contains_key(id)
    }

    /// Number of suspects tracked by this ledger.
    pub fn suspect_count(&self) -> usize {
        self.threads.len()
    }

    /// Number of suspects with at least one message.
    pub fn interrogated_count(&self) -> usize {
        self.threads.values().filter(|t| !t.messages.is_empty()).count()
    }

    /// Returns true if this suspect has been interrogated at least once.
    pub fn is_interrogated(&self, id: &SuspectId) -> bool {
        self.len(id) > 0
    }

    /// Returns true if every suspect has been interrogated.
    pub fn all_interrogated(&self) -> bool {
        !self.threads.is_empty() && self.interrogated_count() == self.suspect_count()
    }

    /// Appends a message to a suspect's thread.
    ///
    /// # Errors
    ///
    /// - `SuspectNotFound` if the ledger has no thread for the suspect
    pub fn append(&mut self, id: &SuspectId, message: Message) -> Result<&Message, DomainError> {
        let thread = self.thread_mut(id)?;
        thread.messages.push(message);
        Ok(thread.messages.last().expect("just pushed"))
    }

    /// Marks a suspect's thread as awaiting a reply.
    ///
    /// # Errors
    ///
    /// - `SuspectNotFound` if the ledger has no thread for the suspect
    /// - `ReplyPending` if a reply is already outstanding for it
    pub fn begin_awaiting(&mut self, id: &SuspectId) -> Result<(), DomainError> {
        let thread = self.thread_mut(id)?;
        if thread.awaiting_reply {
            return Err(DomainError::new(
                ErrorCode::ReplyPending,
                "A reply is already pending for this suspect",
            )
            .with_detail("suspect_id", id.as_str()));
        }
        thread.awaiting_reply = true;
        Ok(())
    }

    /// Clears the awaiting-reply flag for a suspect's thread.
    pub fn end_awaiting(&mut self, id: &SuspectId) -> Result<(), DomainError> {
        let thread = self.thread_mut(id)?;
        thread.awaiting_reply = false;
        Ok(())
    }

    /// Returns true if a reply is outstanding for this suspect.
    pub fn is_awaiting(&self, id: &SuspectId) -> bool {
        self.threads.get(id).is_some_and(|t| t.awaiting_reply)
    }

    /// Returns true if any suspect has an outstanding reply.
    pub fn any_awaiting(&self) -> bool {
        self.threads.values().any(|t| t.awaiting_reply)
    }

    fn thread_mut(&mut self, id: &SuspectId) -> Result<&mut Thread, DomainError> {
        self.threads.get_mut(id).ok_or_else(|| {
            DomainError::new(ErrorCode::SuspectNotFound, "Suspect has no chat thread")
                .with_detail("suspect_id", id.as_str())
        })
    }
}
