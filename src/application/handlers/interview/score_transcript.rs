//! ScoreTranscriptHandler - Score a previously saved transcript

use std::sync::Arc;

use crate::domain::analysis::{FeedbackAnalyzer, InterviewReport};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::{TranscriptStore, TranscriptStoreError};

/// Command to score a stored transcript
#[derive(Debug, Clone)]
pub struct ScoreTranscriptCommand {
    pub session_id: SessionId,
}

/// Error type for scoring stored transcripts
#[derive(Debug, Clone)]
pub enum ScoreTranscriptError {
    /// No transcript stored for the session
    NotFound(SessionId),
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for ScoreTranscriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreTranscriptError::NotFound(id) => {
                write!(f, "Transcript not found for session: {}", id)
            }
            ScoreTranscriptError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for ScoreTranscriptError {}

impl From<TranscriptStoreError> for ScoreTranscriptError {
    fn from(err: TranscriptStoreError) -> Self {
        match err {
            TranscriptStoreError::NotFound(id) => ScoreTranscriptError::NotFound(id),
            other => ScoreTranscriptError::Storage(other.to_string()),
        }
    }
}

impl From<ScoreTranscriptError> for DomainError {
    fn from(err: ScoreTranscriptError) -> Self {
        let code = match err {
            ScoreTranscriptError::NotFound(_) => ErrorCode::TranscriptNotFound,
            ScoreTranscriptError::Storage(_) => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Handler for scoring stored transcripts
pub struct ScoreTranscriptHandler {
    store: Arc<dyn TranscriptStore>,
}

impl ScoreTranscriptHandler {
    pub fn new(store: Arc<dyn TranscriptStore>) -> Self {
        Self { store }
    }

    pub fn handle(
        &self,
        cmd: ScoreTranscriptCommand,
    ) -> Result<InterviewReport, ScoreTranscriptError> {
        let events = self.store.load(cmd.session_id)?;
        Ok(FeedbackAnalyzer::analyze(&events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryTranscriptStore;
    use crate::domain::interview::SessionEvent;

    #[test]
    fn scores_stored_transcript() {
        let store = Arc::new(InMemoryTranscriptStore::new());
        let session_id = SessionId::new();
        store
            .save(
                session_id,
                &[
                    SessionEvent::agent("Tell me about a project."),
                    SessionEvent::user("I built a caching layer and reduced latency by 40%"),
                ],
            )
            .unwrap();

        let report = ScoreTranscriptHandler::new(store)
            .handle(ScoreTranscriptCommand { session_id })
            .unwrap();

        assert_eq!(report.scored().unwrap().examples, 5.0);
    }

    #[test]
    fn missing_transcript_is_not_found() {
        let handler = ScoreTranscriptHandler::new(Arc::new(InMemoryTranscriptStore::new()));
        let session_id = SessionId::new();

        let result = handler.handle(ScoreTranscriptCommand { session_id });

        assert!(matches!(result, Err(ScoreTranscriptError::NotFound(id)) if id == session_id));
    }

    #[test]
    fn not_found_maps_to_error_code() {
        let domain: DomainError = ScoreTranscriptError::NotFound(SessionId::new()).into();
        assert_eq!(domain.code, ErrorCode::TranscriptNotFound);
    }
}
