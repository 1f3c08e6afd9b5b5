//! Transcript Store Port - Interface for persisting session transcripts.
//!
//! A transcript is a session's event log. Stores keep it in the
//! `[{"type": ..., "text": ...}]` interchange shape so the scoring side can
//! read it back without knowing which store wrote it.

use crate::domain::foundation::SessionId;
use crate::domain::interview::SessionEvent;

/// Errors that can occur during transcript storage operations
#[derive(Debug, thiserror::Error)]
pub enum TranscriptStoreError {
    #[error("Transcript not found for session: {0}")]
    NotFound(SessionId),

    #[error("Failed to serialize transcript: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize transcript: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for saving and loading transcripts
pub trait TranscriptStore: Send + Sync {
    /// Save a session's transcript, replacing any previous copy
    ///
    /// # Errors
    /// Returns `TranscriptStoreError` if save fails
    fn save(&self, session_id: SessionId, events: &[SessionEvent])
        -> Result<(), TranscriptStoreError>;

    /// Load a session's transcript
    ///
    /// # Errors
    /// Returns `TranscriptStoreError::NotFound` if no transcript exists
    fn load(&self, session_id: SessionId) -> Result<Vec<SessionEvent>, TranscriptStoreError>;

    /// Check if a transcript exists for a session
    fn exists(&self, session_id: SessionId) -> Result<bool, TranscriptStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_session() {
        let id = SessionId::new();
        let err = TranscriptStoreError::NotFound(id);
        assert!(err.to_string().contains("Transcript not found"));
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn serialization_error_message() {
        let err = TranscriptStoreError::SerializationFailed("bad".to_string());
        assert!(err.to_string().contains("serialize"));
    }
}
