//! Text Generator Port - Interface for an external follow-up writer.
//!
//! The generative reply strategy hands the current question and answer to
//! an implementation of this port and uses its reply as the follow-up
//! prompt. Network clients for hosted language models live outside this
//! crate; tests and demos use `ScriptedGenerator`.
//!
//! # Example
//!
//! ```ignore
//! struct Echo;
//!
//! impl TextGenerator for Echo {
//!     fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
//!         Ok(format!("You said: {}", request.answer))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "echo"
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::interview::{FollowUpStyle, QuestionCategory};

/// Errors a text generator can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Generator unavailable: {0}")]
    Unavailable(String),

    #[error("Generator returned an empty response")]
    EmptyResponse,
}

/// Port for producing a follow-up prompt from free text.
pub trait TextGenerator: Send + Sync {
    /// Produce a follow-up prompt for the given answer.
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}

/// Input handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub role: String,
    pub question: String,
    pub category: QuestionCategory,
    pub answer: String,
    pub style: FollowUpStyle,
    /// Follow-ups already asked for this question.
    pub followups_used: u32,
}

impl GenerationRequest {
    /// Builds the instruction text a language-model backend would send.
    pub fn to_prompt(&self) -> String {
        format!(
            "You are interviewing a candidate for the role of {role}. \
             Your follow-up style is '{style}'.\n\
             Question ({category}): {question}\n\
             Candidate answer: {answer}\n\
             Reply with a single short follow-up question.",
            role = self.role,
            style = self.style,
            category = self.category,
            question = self.question,
            answer = self.answer,
        )
    }
}
