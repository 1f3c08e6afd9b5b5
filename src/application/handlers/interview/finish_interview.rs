//! FinishInterviewHandler - Persist a session's transcript and score it

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::analysis::{FeedbackAnalyzer, InterviewReport};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::interview::InterviewEngine;
use crate::ports::{TranscriptStore, TranscriptStoreError};

/// Result of finishing an interview
#[derive(Debug, Clone)]
pub struct FinishInterviewResult {
    pub session_id: SessionId,
    pub report: InterviewReport,
    /// Whether the transcript was written to the store.
    pub saved: bool,
}

/// Error type for finishing interviews
#[derive(Debug, Clone)]
pub enum FinishInterviewError {
    /// Transcript could not be saved
    Storage(String),
}

impl std::fmt::Display for FinishInterviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinishInterviewError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for FinishInterviewError {}

impl From<TranscriptStoreError> for FinishInterviewError {
    fn from(err: TranscriptStoreError) -> Self {
        FinishInterviewError::Storage(err.to_string())
    }
}

impl From<FinishInterviewError> for DomainError {
    fn from(err: FinishInterviewError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Handler for finishing interviews
///
/// Sessions may be finished early; the report covers whatever was answered.
pub struct FinishInterviewHandler {
    store: Arc<dyn TranscriptStore>,
    save_transcripts: bool,
}

impl FinishInterviewHandler {
    pub fn new(store: Arc<dyn TranscriptStore>) -> Self {
        Self {
            store,
            save_transcripts: true,
        }
    }

    /// Disables or enables persisting the transcript.
    pub fn with_saving(mut self, save_transcripts: bool) -> Self {
        self.save_transcripts = save_transcripts;
        self
    }

    pub fn handle(
        &self,
        engine: &InterviewEngine,
    ) -> Result<FinishInterviewResult, FinishInterviewError> {
        let session_id = engine.session_id();

        // 1. Persist the transcript
        if self.save_transcripts {
            self.store.save(session_id, engine.events())?;
        }

        // 2. Score it
        let report = FeedbackAnalyzer::analyze(engine.events());
        match report.scored() {
            Some(scored) => info!(
                session_id = %session_id,
                composite = scored.composite,
                answers = scored.meta.answers_count,
                complete = engine.is_complete(),
                "Interview scored"
            ),
            None => warn!(session_id = %session_id, "Interview finished without answers"),
        }

        Ok(FinishInterviewResult {
            session_id,
            report,
            saved: self.save_transcripts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryTranscriptStore;

    fn answered_engine() -> InterviewEngine {
        let mut engine = InterviewEngine::new("Backend Engineer", "efficient", 1);
        engine.ask_current();
        engine
            .process_answer("I built a caching layer and reduced latency by 40%")
            .unwrap();
        engine
    }

    #[test]
    fn saves_and_scores() {
        let store = Arc::new(InMemoryTranscriptStore::new());
        let handler = FinishInterviewHandler::new(store.clone());
        let engine = answered_engine();

        let result = handler.handle(&engine).unwrap();

        assert!(result.saved);
        assert_eq!(store.load(result.session_id).unwrap(), engine.events());
        assert!(result.report.is_scored());
    }

    #[test]
    fn skips_saving_when_disabled() {
        let store = Arc::new(InMemoryTranscriptStore::new());
        let handler = FinishInterviewHandler::new(store.clone()).with_saving(false);

        let result = handler.handle(&answered_engine()).unwrap();

        assert!(!result.saved);
        assert!(store.is_empty());
    }

    #[test]
    fn unanswered_session_reports_no_answers() {
        let store = Arc::new(InMemoryTranscriptStore::new());
        let handler = FinishInterviewHandler::new(store);
        let engine = InterviewEngine::new("Backend Engineer", "balanced", 2);

        let result = handler.handle(&engine).unwrap();

        assert_eq!(result.report, InterviewReport::no_answers());
    }

    #[test]
    fn storage_error_converts_to_domain_error() {
        let err = FinishInterviewError::from(TranscriptStoreError::IoError("disk full".into()));
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::StorageError);
        assert!(domain.message.contains("disk full"));
    }
}
