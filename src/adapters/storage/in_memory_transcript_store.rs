//! In-Memory Transcript Store Adapter
//!
//! Keeps transcripts in memory. Useful for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::foundation::SessionId;
use crate::domain::interview::SessionEvent;
use crate::ports::{TranscriptStore, TranscriptStoreError};

/// In-memory storage for transcripts
#[derive(Debug, Clone, Default)]
pub struct InMemoryTranscriptStore {
    transcripts: Arc<RwLock<HashMap<SessionId, Vec<SessionEvent>>>>,
}

impl InMemoryTranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored transcripts
    pub fn len(&self) -> usize {
        self.transcripts.read().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all stored transcripts (useful for tests)
    pub fn clear(&self) {
        if let Ok(mut transcripts) = self.transcripts.write() {
            transcripts.clear();
        }
    }
}

fn poisoned<T>(_: T) -> TranscriptStoreError {
    TranscriptStoreError::IoError("transcript store lock poisoned".to_string())
}

impl TranscriptStore for InMemoryTranscriptStore {
    fn save(
        &self,
        session_id: SessionId,
        events: &[SessionEvent],
    ) -> Result<(), TranscriptStoreError> {
        let mut transcripts = self.transcripts.write().map_err(poisoned)?;
        transcripts.insert(session_id, events.to_vec());
        Ok(())
    }

    fn load(&self, session_id: SessionId) -> Result<Vec<SessionEvent>, TranscriptStoreError> {
        let transcripts = self.transcripts.read().map_err(poisoned)?;
        transcripts
            .get(&session_id)
            .cloned()
            .ok_or(TranscriptStoreError::NotFound(session_id))
    }

    fn exists(&self, session_id: SessionId) -> Result<bool, TranscriptStoreError> {
        let transcripts = self.transcripts.read().map_err(poisoned)?;
        Ok(transcripts.contains_key(&session_id))
    }
}
