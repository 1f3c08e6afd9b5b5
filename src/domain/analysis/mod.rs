//! Analysis Module - Pure scoring of finished interview transcripts.
//!
//! # Components
//!
//! - `AnswerScorer` - Communication, technical depth and STAR scores per answer
//! - `FeedbackAnalyzer` - Aggregation into a `FeedbackReport`
//! - `build_suggestions` - Fixed-order improvement suggestions
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take a
//! transcript as input and return a report. No ports or adapters needed
//! since there's no I/O.

mod answer_scorer;
mod feedback_analyzer;
mod report;
mod suggestions;

pub use answer_scorer::{
    clamp_score, AnswerScore, AnswerScorer, MAX_SCORE, OUTCOME_PHRASES, STAR_INDICATORS,
    TECHNICAL_KEYWORDS,
};
pub use feedback_analyzer::{
    FeedbackAnalyzer, COMMUNICATION_WEIGHT, EXAMPLES_WEIGHT, TECHNICAL_WEIGHT,
};
pub use report::{round_to, FeedbackReport, InterviewReport, ReportMeta, NO_ANSWERS_ERROR};
pub use suggestions::{
    build_suggestions, SuggestionInputs, CLOSING_TIP, COMMUNICATION_THRESHOLD,
    EXAMPLES_THRESHOLD, FILLER_RATIO_THRESHOLD, TECHNICAL_THRESHOLD,
};
