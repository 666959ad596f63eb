//! Session module - One play-through of the game.
//!
//! The session owns the active case, the per-suspect chat ledgers,
//! the accusation, and the verdict, and mediates every phase
//! transition through the [`GameSession`] aggregate.

mod accusation;
mod ledger;
mod message;
mod phase;
mod session;
mod verdict;

pub use accusation::{Accusation, DEFAULT_MOTIVE};
pub use ledger::ChatLedger;
pub use message::{Message, Sender};
pub use phase::GamePhase;
pub use session::GameSession;
pub use verdict::{Verdict, SOLVE_THRESHOLD};
