//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod interview;

pub use interview::{
    FinishInterviewError, FinishInterviewHandler, FinishInterviewResult, ScoreTranscriptCommand,
    ScoreTranscriptError, ScoreTranscriptHandler, SkipQuestionHandler, SubmitAnswerCommand,
    SubmitAnswerError, SubmitAnswerHandler,
};
