//! Interview dialogue engine.
//!
//! Owns one session: the question list, the cursor, per-question follow-up
//! counters and the append-only event log. Callers drive it one answer at
//! a time and render whatever prompt comes back.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::catalog::QuestionCatalog;
use super::event::SessionEvent;
use super::followup::{is_off_topic, AdvanceReason, AnswerContext, FollowUpDecision};
use super::persona::Persona;
use super::question::Question;
use super::state::InterviewState;
use super::strategy::{ReplyStrategy, RuleBasedStrategy};
use crate::domain::foundation::{SessionId, StateMachine, ValidationError};

/// Agent message appended once when the last question is done.
pub const CLOSING_MESSAGE: &str =
    "Thank you, that concludes the interview. Your feedback report is being prepared.";

/// What the caller should show after a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "prompt", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// Probe the same question again.
    FollowUp(String),
    /// Move to the next question.
    Next(String),
    /// The session is over.
    Done,
}

impl TurnOutcome {
    /// The prompt to render, if any.
    pub fn prompt(&self) -> Option<&str> {
        match self {
            TurnOutcome::FollowUp(p) | TurnOutcome::Next(p) => Some(p),
            TurnOutcome::Done => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TurnOutcome::Done)
    }
}

/// One interview session.
///
/// # Invariants
///
/// - The event log only grows between restarts.
/// - The cursor never passes the question count; reaching it means `Complete`.
/// - No question's follow-up counter exceeds the persona's cap.
/// - The question list is fixed once built.
pub struct InterviewEngine {
    session_id: SessionId,
    role: &'static str,
    persona: Persona,
    questions: Vec<Question>,
    followups: Vec<u32>,
    events: Vec<SessionEvent>,
    state: InterviewState,
    strategy: Box<dyn ReplyStrategy>,
}

impl InterviewEngine {
    /// Builds and starts a session.
    ///
    /// Unknown roles and personas fall back to the defaults. The question
    /// list is a seeded shuffle of the role's catalog, so the same
    /// (role, persona) pair always yields the same order.
    pub fn new(role: &str, persona: &str, question_count: usize) -> Self {
        let (catalog, role_fell_back) = QuestionCatalog::resolve(role);
        if role_fell_back {
            warn!(requested = role, fallback = catalog.role, "Unknown role, using default");
        }

        let (persona_config, persona_fell_back) = Persona::resolve(persona);
        if persona_fell_back {
            warn!(
                requested = persona,
                fallback = persona_config.name(),
                "Unknown persona, using default"
            );
        }

        let questions = QuestionCatalog::select(catalog, persona_config.name(), question_count);
        if questions.len() != question_count {
            debug!(
                requested = question_count,
                selected = questions.len(),
                "Question count clamped to catalog size"
            );
        }

        let mut engine = Self {
            session_id: SessionId::new(),
            role: catalog.role,
            followups: vec![0; questions.len()],
            persona: persona_config,
            questions,
            events: Vec::new(),
            state: InterviewState::default(),
            strategy: Box::new(RuleBasedStrategy),
        };
        engine.start();
        engine
    }

    /// Replaces the reply strategy. Call before the first answer.
    pub fn with_strategy(mut self, strategy: impl ReplyStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Resets the session: clears the log, rewinds the cursor and zeroes
    /// all follow-up counters. Safe to call at any point.
    pub fn start(&mut self) {
        self.events.clear();
        self.events.push(SessionEvent::system(format!(
            "Interview started. Role: {}. Persona: {} ({} follow-ups, up to {} per question).",
            self.role,
            self.persona.name(),
            self.persona.style(),
            self.persona.max_followups()
        )));
        self.followups.iter_mut().for_each(|c| *c = 0);
        self.state = InterviewState::default();

        info!(
            session_id = %self.session_id,
            role = self.role,
            persona = self.persona.name(),
            questions = self.questions.len(),
            strategy = self.strategy.name(),
            "Interview started"
        );
    }

    /// Appends and returns the current question, or `None` once complete.
    pub fn ask_current(&mut self) -> Option<String> {
        let index = self.state.question_index()?;
        let prompt = self.questions.get(index)?.prompt().to_string();
        self.events.push(SessionEvent::agent(prompt.clone()));
        Some(prompt)
    }

    /// Records an answer and decides what happens next.
    ///
    /// A complete session returns `Done` without touching the log.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the answer is empty or whitespace; nothing changes.
    pub fn process_answer(&mut self, text: &str) -> Result<TurnOutcome, ValidationError> {
        let Some(index) = self.state.question_index() else {
            return Ok(TurnOutcome::Done);
        };
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("answer"));
        }

        self.events.push(SessionEvent::user(text));

        let decision = self.decide(index, text);
        match decision {
            FollowUpDecision::Probe(follow_up) => {
                self.followups[index] += 1;
                debug!(
                    session_id = %self.session_id,
                    question_index = index,
                    kind = ?follow_up.kind,
                    followups = self.followups[index],
                    "Follow-up asked"
                );
                self.enter(InterviewState::InProgress {
                    question_index: index,
                });
                self.events.push(SessionEvent::agent(follow_up.prompt.clone()));
                Ok(TurnOutcome::FollowUp(follow_up.prompt))
            }
            FollowUpDecision::Advance(reason) => {
                debug!(
                    session_id = %self.session_id,
                    question_index = index,
                    reason = ?reason,
                    "Advancing"
                );
                Ok(self.advance_from(index))
            }
        }
    }

    /// Skips to the next question regardless of follow-up state.
    pub fn force_advance(&mut self) -> TurnOutcome {
        match self.state.question_index() {
            Some(index) => {
                debug!(session_id = %self.session_id, question_index = index, "Question skipped");
                self.advance_from(index)
            }
            None => TurnOutcome::Done,
        }
    }

    fn decide(&self, index: usize, answer: &str) -> FollowUpDecision {
        let used = self.followups[index];
        if used >= self.persona.max_followups() {
            return FollowUpDecision::Advance(AdvanceReason::CapReached);
        }
        if is_off_topic(answer) {
            return FollowUpDecision::Advance(AdvanceReason::OffTopic);
        }

        let ctx = AnswerContext {
            answer,
            question: &self.questions[index],
            persona: &self.persona,
            role: self.role,
            followups_used: used,
        };
        match self.strategy.follow_up(&ctx) {
            Some(follow_up) => FollowUpDecision::Probe(follow_up),
            None => FollowUpDecision::Advance(AdvanceReason::StrategyDeclined),
        }
    }

    fn advance_from(&mut self, index: usize) -> TurnOutcome {
        let next = index + 1;
        if next >= self.questions.len() {
            self.enter(InterviewState::Complete);
            self.events.push(SessionEvent::agent(CLOSING_MESSAGE));
            info!(
                session_id = %self.session_id,
                answers = self.events.iter().filter(|e| e.is_user()).count(),
                "Interview complete"
            );
            return TurnOutcome::Done;
        }

        self.enter(InterviewState::InProgress {
            question_index: next,
        });
        match self.ask_current() {
            Some(prompt) => TurnOutcome::Next(prompt),
            None => TurnOutcome::Done,
        }
    }

    /// Moves to `target` if the state machine allows it; otherwise logs and
    /// leaves the state unchanged.
    fn enter(&mut self, target: InterviewState) {
        match self.state.transition_to(target) {
            Ok(next) => self.state = next,
            Err(err) => warn!(
                session_id = %self.session_id,
                error = %err,
                "Rejected interview state transition"
            ),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn role(&self) -> &str {
        self.role
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn state(&self) -> InterviewState {
        self.state
    }

    /// Cursor into the question list; equals the question count once complete.
    pub fn current_index(&self) -> usize {
        self.state.question_index().unwrap_or(self.questions.len())
    }

    /// The question currently being asked.
    pub fn current_question(&self) -> Option<&Question> {
        self.state
            .question_index()
            .and_then(|index| self.questions.get(index))
    }

    /// Follow-ups asked so far for the question at `index`.
    pub fn followup_count(&self, index: usize) -> u32 {
        self.followups.get(index).copied().unwrap_or(0)
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_terminal()
    }

    /// The event log, in append order.
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl fmt::Debug for InterviewEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterviewEngine")
            .field("session_id", &self.session_id)
            .field("role", &self.role)
            .field("persona", &self.persona)
            .field("questions", &self.questions.len())
            .field("state", &self.state)
            .field("events", &self.events.len())
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
