//! Transcript storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where and whether transcripts are saved
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory for `<session_id>.json` transcript files
    #[serde(default = "default_transcript_dir")]
    pub transcript_dir: String,

    /// Save the transcript when a session finishes
    #[serde(default = "default_save_transcripts")]
    pub save_transcripts: bool,
}

impl StorageConfig {
    pub fn transcript_path(&self) -> PathBuf {
        PathBuf::from(&self.transcript_dir)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.transcript_dir.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.transcript_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            transcript_dir: default_transcript_dir(),
            save_transcripts: default_save_transcripts(),
        }
    }
}

fn default_transcript_dir() -> String {
    "transcripts".to_string()
}

fn default_save_transcripts() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.transcript_dir, "transcripts");
        assert!(config.save_transcripts);
        assert_eq!(config.transcript_path(), PathBuf::from("transcripts"));
    }

    #[test]
    fn test_empty_dir_is_rejected() {
        let config = StorageConfig {
            transcript_dir: String::new(),
            save_transcripts: true,
        };
        assert!(config.validate().is_err());
    }
}
