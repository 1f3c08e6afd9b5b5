//! Storage Adapters
//!
//! Implementations of the TranscriptStore port.
//!
//! ## Available Adapters
//!
//! - **JsonTranscriptStore** - Stores transcripts as pretty JSON files on disk
//! - **InMemoryTranscriptStore** - Stores transcripts in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryTranscriptStore, JsonTranscriptStore};
//!
//! // Production: file-based storage
//! let store = JsonTranscriptStore::new("./transcripts");
//!
//! // Testing: in-memory storage
//! let store = InMemoryTranscriptStore::new();
//! ```

mod in_memory_transcript_store;
mod json_transcript_store;

pub use in_memory_transcript_store::InMemoryTranscriptStore;
pub use json_transcript_store::{read_transcript, write_transcript, JsonTranscriptStore};
