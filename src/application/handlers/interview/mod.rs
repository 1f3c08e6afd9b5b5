//! Interview handlers - Drive sessions and score their transcripts.

mod finish_interview;
mod score_transcript;
mod skip_question;
mod submit_answer;

pub use finish_interview::{FinishInterviewError, FinishInterviewHandler, FinishInterviewResult};
pub use score_transcript::{ScoreTranscriptCommand, ScoreTranscriptError, ScoreTranscriptHandler};
pub use skip_question::SkipQuestionHandler;
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerError, SubmitAnswerHandler};
