//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, state machine trait)
//! - `text_signals` - Lexical heuristics shared by both engines
//! - `interview` - Dialogue engine: catalog, personas, follow-ups, event log
//! - `analysis` - Scoring engine: pure transcript to feedback report

pub mod analysis;
pub mod foundation;
pub mod interview;
pub mod text_signals;
