//! Interview Partner - Mock interview practice
//!
//! A dialogue engine that asks role-specific questions and probes answers
//! with persona-driven follow-ups, plus a scoring engine that turns the
//! finished transcript into a feedback report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
