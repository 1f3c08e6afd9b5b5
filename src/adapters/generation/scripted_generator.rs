//! Scripted text generator.
//!
//! A deterministic implementation of the `TextGenerator` port that replays
//! queued replies in order. Used by tests and offline demos of the
//! generative reply strategy.
//!
//! # Example
//!
//! ```ignore
//! let generator = ScriptedGenerator::new()
//!     .with_reply("What did the profiler show?")
//!     .with_error(GenerationError::Unavailable("offline".into()));
//!
//! let engine = InterviewEngine::new("Backend Engineer", "curious", 3)
//!     .with_strategy(GenerativeStrategy::new(generator));
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{GenerationError, GenerationRequest, TextGenerator};

/// Reply returned once the script runs out.
pub const DEFAULT_SCRIPTED_REPLY: &str = "Can you tell me more about that?";

/// Generator that replays queued replies and records every request along
/// with the prompt a hosted backend would have been sent.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGenerator {
    replies: Arc<Mutex<VecDeque<Result<String, GenerationError>>>>,
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(reply.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: GenerationError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the number of requests received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded requests.
    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns the rendered prompt for every recorded request.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn next_reply(&self) -> Result<String, GenerationError> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(DEFAULT_SCRIPTED_REPLY.to_string()))
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(request.clone());
        self.prompts.lock().unwrap().push(request.to_prompt());
        self.next_reply()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
