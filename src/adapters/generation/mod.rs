//! Text generation adapters.
//!
//! Implementations of the `TextGenerator` port.

mod scripted_generator;

pub use scripted_generator::{ScriptedGenerator, DEFAULT_SCRIPTED_REPLY};
