//! Reply strategies.
//!
//! A strategy turns an answer that already passed the engine's guards into
//! a follow-up prompt, or declines so the engine advances. Strategies are
//! chosen when the engine is built and never change mid-session.

use tracing::warn;

use super::followup::{AnswerContext, FollowUp, FollowUpKind};
use crate::ports::{GenerationRequest, TextGenerator};

/// Chooses the follow-up for an answer.
pub trait ReplyStrategy: Send {
    /// Returns the follow-up to ask, or `None` to advance.
    fn follow_up(&self, ctx: &AnswerContext<'_>) -> Option<FollowUp>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Templated follow-ups driven by the fixed trigger chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedStrategy;

impl ReplyStrategy for RuleBasedStrategy {
    fn follow_up(&self, ctx: &AnswerContext<'_>) -> Option<FollowUp> {
        let kind = FollowUpKind::detect(ctx);
        Some(FollowUp::new(kind, kind.render(ctx.persona.style(), ctx.role)))
    }

    fn name(&self) -> &'static str {
        "rule_based"
    }
}

/// Follow-ups written by an external text generator.
///
/// Falls back to the rule-based prompt when the generator fails or
/// returns only whitespace.
pub struct GenerativeStrategy<G: TextGenerator> {
    generator: G,
    fallback: RuleBasedStrategy,
}

impl<G: TextGenerator> GenerativeStrategy<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            fallback: RuleBasedStrategy,
        }
    }

    /// Returns the wrapped generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }
}

impl<G: TextGenerator> ReplyStrategy for GenerativeStrategy<G> {
    fn follow_up(&self, ctx: &AnswerContext<'_>) -> Option<FollowUp> {
        let request = GenerationRequest {
            role: ctx.role.to_string(),
            question: ctx.question.prompt().to_string(),
            category: ctx.question.category(),
            answer: ctx.answer.to_string(),
            style: ctx.persona.style(),
            followups_used: ctx.followups_used,
        };

        match self.generator.generate(&request) {
            Ok(text) if !text.trim().is_empty() => {
                Some(FollowUp::new(FollowUpKind::Generated, text.trim()))
            }
            Ok(_) => {
                warn!(
                    generator = self.generator.name(),
                    "Generator returned blank follow-up, using rule-based prompt"
                );
                self.fallback.follow_up(ctx)
            }
            Err(err) => {
                warn!(
                    generator = self.generator.name(),
                    error = %err,
                    "Generator failed, using rule-based prompt"
                );
                self.fallback.follow_up(ctx)
            }
        }
    }

    fn name(&self) -> &'static str {
        "generative"
    }
}
