//! Case module - The mystery under investigation.
//!
//! A case is generated (or drawn from the offline casebook) at game
//! start and owned by the session until the player returns to the menu.

mod case;
mod difficulty;
mod suspect;

pub use case::Case;
pub use difficulty::Difficulty;
pub use suspect::{OfflineResponse, Suspect};
