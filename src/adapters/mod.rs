//! Adapters - implementations of the capability ports.
//!
//! - `gemini` - live generative-language API client
//! - `offline` - deterministic fallback implementations
//! - `fallback` - decorators that absorb live failures into the
//!   offline implementations
//! - `mock` - configurable test doubles

pub mod fallback;
pub mod gemini;
pub mod mock;
pub mod offline;
