//! Session event log entries.
//!
//! The event log is the transcript. Its JSON form, an array of
//! `{"type": ..., "text": ...}` objects in append order, is the interchange
//! format read back by the analysis module.

use serde::{Deserialize, Serialize};

/// Who produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// Session bookkeeping, not shown as dialogue.
    System,
    /// The interviewer.
    Agent,
    /// The candidate.
    User,
}

/// One entry in a session's event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEvent {
    #[serde(rename = "type")]
    pub speaker: Speaker,
    pub text: String,
}

impl SessionEvent {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Speaker::System, text)
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Speaker::Agent, text)
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    pub fn is_user(&self) -> bool {
        self.speaker == Speaker::User
    }
}
