//! Configuration error types

use thiserror::Error;

use super::interview::MAX_QUESTION_COUNT;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Question count must be between 1 and {max}, got {0}", max = MAX_QUESTION_COUNT)]
    InvalidQuestionCount(usize),
}
