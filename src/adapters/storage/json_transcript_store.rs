//! JSON Transcript Store Adapter
//!
//! Stores each session's transcript as `<session_id>.json` under a base
//! directory: a pretty-printed array of `{"type", "text"}` objects in append
//! order, UTF-8 with non-ASCII text kept as-is.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::foundation::SessionId;
use crate::domain::interview::SessionEvent;
use crate::ports::{TranscriptStore, TranscriptStoreError};

/// File-based storage for transcripts
#[derive(Debug, Clone)]
pub struct JsonTranscriptStore {
    base_path: PathBuf,
}

impl JsonTranscriptStore {
    /// Create a new store rooted at `base_path`
    ///
    /// The directory is created on first save.
    ///
    /// # Example
    /// ```ignore
    /// let store = JsonTranscriptStore::new("./transcripts");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the transcript file path for a session
    pub fn transcript_path(&self, session_id: SessionId) -> PathBuf {
        self.base_path.join(format!("{}.json", session_id))
    }
}

impl TranscriptStore for JsonTranscriptStore {
    fn save(
        &self,
        session_id: SessionId,
        events: &[SessionEvent],
    ) -> Result<(), TranscriptStoreError> {
        fs::create_dir_all(&self.base_path)
            .map_err(|e| TranscriptStoreError::IoError(e.to_string()))?;
        write_transcript(self.transcript_path(session_id), events)
    }

    fn load(&self, session_id: SessionId) -> Result<Vec<SessionEvent>, TranscriptStoreError> {
        let path = self.transcript_path(session_id);
        if !path.exists() {
            return Err(TranscriptStoreError::NotFound(session_id));
        }
        read_transcript(path)
    }

    fn exists(&self, session_id: SessionId) -> Result<bool, TranscriptStoreError> {
        Ok(self.transcript_path(session_id).exists())
    }
}

/// Writes a transcript to an explicit path, replacing any existing file.
pub fn write_transcript<P: AsRef<Path>>(
    path: P,
    events: &[SessionEvent],
) -> Result<(), TranscriptStoreError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(events)
        .map_err(|e| TranscriptStoreError::SerializationFailed(e.to_string()))?;

    fs::write(path, json).map_err(|e| TranscriptStoreError::IoError(e.to_string()))?;

    debug!(path = %path.display(), events = events.len(), "Transcript saved");
    Ok(())
}

/// Reads a transcript from an explicit path.
pub fn read_transcript<P: AsRef<Path>>(path: P) -> Result<Vec<SessionEvent>, TranscriptStoreError> {
    let path = path.as_ref();
    let json =
        fs::read_to_string(path).map_err(|e| TranscriptStoreError::IoError(e.to_string()))?;

    let events: Vec<SessionEvent> = serde_json::from_str(&json)
        .map_err(|e| TranscriptStoreError::DeserializationFailed(e.to_string()))?;

    debug!(path = %path.display(), events = events.len(), "Transcript loaded");
    Ok(events)
}
