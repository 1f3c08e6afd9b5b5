//! Feedback Analyzer - Turns a finished transcript into a feedback report.

use super::answer_scorer::{clamp_score, AnswerScore, AnswerScorer};
use super::report::{round_to, FeedbackReport, InterviewReport, ReportMeta};
use super::suggestions::{build_suggestions, SuggestionInputs};
use crate::domain::interview::{SessionEvent, Speaker};

/// Composite weight for communication.
pub const COMMUNICATION_WEIGHT: f64 = 0.4;
/// Composite weight for technical depth.
pub const TECHNICAL_WEIGHT: f64 = 0.35;
/// Composite weight for examples.
pub const EXAMPLES_WEIGHT: f64 = 0.25;

/// Pure scorer over a transcript.
pub struct FeedbackAnalyzer;

impl FeedbackAnalyzer {
    /// Scores every non-blank user answer and aggregates the results.
    ///
    /// # Edge Cases
    /// - No user answers (or only blank ones): `InterviewReport::NoAnswers`
    /// - System and agent events are ignored
    pub fn analyze(events: &[SessionEvent]) -> InterviewReport {
        let answers = Self::answers(events);
        if answers.is_empty() {
            return InterviewReport::no_answers();
        }

        let scores: Vec<AnswerScore> = answers.iter().map(|a| AnswerScorer::score(a)).collect();
        InterviewReport::Scored(Self::aggregate(&scores))
    }

    /// Trimmed, non-blank user utterances in transcript order.
    pub fn answers(events: &[SessionEvent]) -> Vec<&str> {
        events
            .iter()
            .filter(|e| e.speaker == Speaker::User)
            .map(|e| e.text.trim())
            .filter(|t| !t.is_empty())
            .collect()
    }

    fn aggregate(scores: &[AnswerScore]) -> FeedbackReport {
        let n = scores.len() as f64;
        let mean = |f: fn(&AnswerScore) -> f64| scores.iter().map(f).sum::<f64>() / n;

        let communication = bounded(mean(|s| s.communication));
        let technical = bounded(mean(|s| s.technical));
        let examples = bounded(mean(|s| s.examples));
        let composite = bounded(
            communication * COMMUNICATION_WEIGHT
                + technical * TECHNICAL_WEIGHT
                + examples * EXAMPLES_WEIGHT,
        );

        let total_words: usize = scores.iter().map(|s| s.word_count).sum();
        let total_fillers: usize = scores.iter().map(|s| s.fillers).sum();
        let avg_fillers = total_fillers as f64 / n;

        let suggestions = build_suggestions(&SuggestionInputs {
            communication,
            technical,
            examples,
            avg_fillers_per_answer: avg_fillers,
        });

        FeedbackReport {
            communication,
            technical,
            examples,
            composite,
            meta: ReportMeta {
                answers_count: scores.len(),
                avg_words: round_to(total_words as f64 / n, 1),
                avg_fillers_per_answer: round_to(avg_fillers, 2),
            },
            suggestions,
        }
    }
}

fn bounded(value: f64) -> f64 {
    clamp_score(round_to(value, 2))
}
