//! SkipQuestionHandler - Move past the current question without answering

use tracing::info;

use crate::domain::interview::{InterviewEngine, TurnOutcome};

/// Handler for skipping the current question
#[derive(Debug, Default)]
pub struct SkipQuestionHandler;

impl SkipQuestionHandler {
    pub fn new() -> Self {
        Self
    }

    /// Advances regardless of follow-up state. A finished session stays
    /// finished and returns `Done`.
    pub fn handle(&self, engine: &mut InterviewEngine) -> TurnOutcome {
        let skipped = engine.current_index();
        let was_active = !engine.is_complete();
        let outcome = engine.force_advance();
        if was_active {
            info!(
                session_id = %engine.session_id(),
                question_index = skipped,
                "Question skipped by candidate"
            );
        }
        outcome
    }
}
