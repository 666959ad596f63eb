//! Detective Heart - AI murder mystery interrogation game core
//!
//! This crate implements the session state machine, per-suspect
//! conversation ledgers, and offline fallback logic behind an
//! interactive detective game driven by a generative language model.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
