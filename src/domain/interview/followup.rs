//! Follow-up decision rules.
//!
//! Given one answer, decides whether the interviewer probes further or
//! moves on. The guards (follow-up cap, off-topic rejection) run before any
//! reply strategy; the trigger chain below is what the rule-based strategy
//! uses to pick a probe.

use serde::{Deserialize, Serialize};

use super::persona::{FollowUpStyle, Persona};
use super::question::Question;
use crate::domain::text_signals::{
    contains_phrase, has_action_verb, has_metric, team_without_first_person, word_count,
};

/// Answers shorter than this many words get an elaboration probe.
pub const SHORT_ANSWER_WORDS: usize = 25;

/// Phrases that mark an answer as questioning the interview itself.
pub const OFF_TOPIC_PHRASES: &[&str] = &[
    "why are you asking",
    "why do you ask",
    "what's the point",
    "what is the point",
    "this is pointless",
    "this interview is pointless",
    "this interview is a joke",
    "this interview is useless",
    "is this even",
    "this is irrelevant",
    "question is irrelevant",
    "not relevant to this job",
    "not relevant to the job",
    "not relevant to this role",
    "stupid question",
    "waste of time",
    "are you a bot",
    "are you a robot",
    "are you an ai",
    "are you real",
];

/// Returns true if the answer is an off-topic or meta complaint.
pub fn is_off_topic(answer: &str) -> bool {
    contains_phrase(answer, OFF_TOPIC_PHRASES)
}

/// Everything a strategy may look at when choosing a follow-up.
#[derive(Debug, Clone, Copy)]
pub struct AnswerContext<'a> {
    pub answer: &'a str,
    pub question: &'a Question,
    pub persona: &'a Persona,
    pub role: &'a str,
    /// Follow-ups already asked for this question.
    pub followups_used: u32,
}

/// Why a follow-up is being asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpKind {
    /// Answer too short.
    Elaborate,
    /// Technical answer without numbers.
    Quantify,
    /// Only "we", never "I".
    PersonalContribution,
    /// Did something but never said what happened.
    Outcome,
    /// Explore persona: why this approach.
    Rationale,
    /// Boundary persona: tie back to the role.
    RoleAlignment,
    /// Fallback: steps and measurable outcome.
    StepsAndOutcome,
    /// Produced by an external text generator.
    Generated,
}

impl FollowUpKind {
    /// Runs the trigger chain and returns the first matching kind.
    ///
    /// Order matters: a short answer is always asked to elaborate before
    /// any other signal is considered.
    pub fn detect(ctx: &AnswerContext<'_>) -> FollowUpKind {
        let answer = ctx.answer;
        let metric = has_metric(answer);

        if word_count(answer) < SHORT_ANSWER_WORDS {
            FollowUpKind::Elaborate
        } else if ctx.question.category().is_technical() && !metric {
            FollowUpKind::Quantify
        } else if team_without_first_person(answer) {
            FollowUpKind::PersonalContribution
        } else if has_action_verb(answer) && !metric {
            FollowUpKind::Outcome
        } else if ctx.persona.style() == FollowUpStyle::Explore {
            FollowUpKind::Rationale
        } else if ctx.persona.style() == FollowUpStyle::Boundary {
            FollowUpKind::RoleAlignment
        } else {
            FollowUpKind::StepsAndOutcome
        }
    }

    /// Renders the templated prompt for this kind.
    pub fn render(&self, style: FollowUpStyle, role: &str) -> String {
        match self {
            FollowUpKind::Elaborate => match style {
                FollowUpStyle::Clarify => {
                    "Let me make sure I follow. Could you walk me through that in a bit more detail?"
                        .to_string()
                }
                FollowUpStyle::Concise => "Could you add one or two specifics?".to_string(),
                FollowUpStyle::Explore => {
                    "Interesting. Can you expand on that and tell me more about the context?"
                        .to_string()
                }
                FollowUpStyle::Boundary => {
                    "Let's stay on the question. Can you give a fuller answer from your own experience?"
                        .to_string()
                }
                FollowUpStyle::Balanced => "Could you elaborate a bit more on that?".to_string(),
            },
            FollowUpKind::Quantify => {
                "Can you quantify the impact? For example latency, throughput, or a percentage improvement."
                    .to_string()
            }
            FollowUpKind::PersonalContribution => {
                "You mentioned the team. What was your personal contribution?".to_string()
            }
            FollowUpKind::Outcome => "What was the measurable outcome of that work?".to_string(),
            FollowUpKind::Rationale => {
                "Why did you choose that approach over the alternatives?".to_string()
            }
            FollowUpKind::RoleAlignment => format!(
                "How does that connect to the day-to-day responsibilities of a {}?",
                role
            ),
            FollowUpKind::StepsAndOutcome | FollowUpKind::Generated => {
                "Can you walk me through the specific steps you took and the measurable outcome?"
                    .to_string()
            }
        }
    }
}

/// A follow-up prompt and the reason it was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUp {
    pub kind: FollowUpKind,
    pub prompt: String,
}

impl FollowUp {
    pub fn new(kind: FollowUpKind, prompt: impl Into<String>) -> Self {
        Self {
            kind,
            prompt: prompt.into(),
        }
    }
}

/// Why the engine moved on instead of probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceReason {
    /// The persona's follow-up cap for this question is used up.
    CapReached,
    /// The answer questioned the interview instead of answering.
    OffTopic,
    /// The reply strategy chose not to probe.
    StrategyDeclined,
}

/// Outcome of the follow-up decision for one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUpDecision {
    Probe(FollowUp),
    Advance(AdvanceReason),
}
