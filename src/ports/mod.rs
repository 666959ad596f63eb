//! Ports - capability interfaces consumed by the session core.
//!
//! The game treats case generation, interrogation, and accusation
//! evaluation as opaque external capabilities. Adapters provide live
//! language-model implementations, deterministic offline fallbacks,
//! and test mocks.

mod case_generator;
mod error;
mod evaluator;
mod interrogator;

pub use case_generator::CaseGenerator;
pub use error::ServiceError;
pub use evaluator::SolutionEvaluator;
pub use interrogator::Interrogator;
