//! Interview module - Dialogue engine for mock interview sessions.
//!
//! # Module Structure
//!
//! - `question` - Question and category types
//! - `catalog` - Per-role question catalog and seeded selection
//! - `persona` - Interviewer personas and follow-up styles
//! - `state` - Session lifecycle state machine
//! - `event` - Event log entries (the transcript)
//! - `followup` - Follow-up guards and trigger chain
//! - `strategy` - Pluggable reply strategies
//! - `engine` - The session engine tying it all together

mod catalog;
mod engine;
mod event;
mod followup;
mod persona;
mod question;
mod state;
mod strategy;

pub use catalog::{shuffle_seed, QuestionCatalog, RoleQuestions, DEFAULT_ROLE};
pub use engine::{InterviewEngine, TurnOutcome, CLOSING_MESSAGE};
pub use event::{SessionEvent, Speaker};
pub use followup::{
    is_off_topic, AdvanceReason, AnswerContext, FollowUp, FollowUpDecision, FollowUpKind,
    OFF_TOPIC_PHRASES, SHORT_ANSWER_WORDS,
};
pub use persona::{FollowUpStyle, Persona, DEFAULT_PERSONA};
pub use question::{Question, QuestionCategory};
pub use state::InterviewState;
pub use strategy::{GenerativeStrategy, ReplyStrategy, RuleBasedStrategy};
