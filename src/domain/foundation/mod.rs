//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, error types and the state machine trait that the
//! interview and analysis modules build on.

mod errors;
mod ids;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use state_machine::StateMachine;
