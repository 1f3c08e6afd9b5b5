//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Transcript stores (JSON files, in-memory)
//! - `generation` - Text generators for the generative reply strategy

pub mod generation;
pub mod storage;

pub use generation::{ScriptedGenerator, DEFAULT_SCRIPTED_REPLY};
pub use storage::{read_transcript, write_transcript, InMemoryTranscriptStore, JsonTranscriptStore};
