//! Application layer - session orchestration.
//!
//! Wires the capability ports to the session aggregate: assembles the
//! live-or-offline service bindings and drives the state machine
//! through the player-facing operations.

mod game;
mod services;

pub use game::{Game, GENERATION_FAILED_BANNER, EVALUATION_FAILED_BANNER};
pub use services::{ServiceBindings, ServiceMode};
