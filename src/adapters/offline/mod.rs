//! Offline fallback adapters.
//!
//! Deterministic, non-AI substitutes used when no live capability is
//! configured or a live call fails: a static casebook, a keyword
//! resolver for interrogation, and a substring heuristic for scoring.

mod casebook;
mod heuristic;
mod resolver;

pub use casebook::Casebook;
pub use heuristic::HeuristicEvaluator;
pub use resolver::KeywordResolver;
