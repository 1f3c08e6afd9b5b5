//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The engines stay free of I/O; handlers add persistence around them.

pub mod handlers;

pub use handlers::{
    FinishInterviewError, FinishInterviewHandler, FinishInterviewResult, ScoreTranscriptCommand,
    ScoreTranscriptError, ScoreTranscriptHandler, SkipQuestionHandler, SubmitAnswerCommand,
    SubmitAnswerError, SubmitAnswerHandler,
};
