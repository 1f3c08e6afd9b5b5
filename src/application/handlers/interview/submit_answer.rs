//! SubmitAnswerHandler - Feed one candidate answer into a running session

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::interview::{InterviewEngine, TurnOutcome};

/// Command to submit an answer
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub answer: String,
}

impl SubmitAnswerCommand {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

/// Error type for submitting answers
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAnswerError {
    /// Answer rejected before reaching the session
    Validation(ValidationError),
}

impl std::fmt::Display for SubmitAnswerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitAnswerError::Validation(err) => write!(f, "Invalid answer: {}", err),
        }
    }
}

impl std::error::Error for SubmitAnswerError {}

impl From<ValidationError> for SubmitAnswerError {
    fn from(err: ValidationError) -> Self {
        SubmitAnswerError::Validation(err)
    }
}

impl From<SubmitAnswerError> for DomainError {
    fn from(err: SubmitAnswerError) -> Self {
        match err {
            SubmitAnswerError::Validation(v) => DomainError::from(v),
        }
    }
}

/// Handler for submitting answers
#[derive(Debug, Default)]
pub struct SubmitAnswerHandler;

impl SubmitAnswerHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        engine: &mut InterviewEngine,
        cmd: SubmitAnswerCommand,
    ) -> Result<TurnOutcome, SubmitAnswerError> {
        Ok(engine.process_answer(&cmd.answer)?)
    }
}
