//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TextGenerator` - External writer of follow-up prompts (generative strategy)
//! - `TranscriptStore` - Persistence for session transcripts

mod text_generator;
mod transcript_store;

pub use text_generator::{GenerationError, GenerationRequest, TextGenerator};
pub use transcript_store::{TranscriptStore, TranscriptStoreError};
