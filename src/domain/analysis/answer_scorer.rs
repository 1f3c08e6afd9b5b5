//! Answer Scorer - Per-answer communication, technical and STAR scores.

use serde::{Deserialize, Serialize};

use crate::domain::text_signals::{contains_phrase, filler_count, has_action_verb, has_metric, word_count};

/// Upper bound for every score.
pub const MAX_SCORE: f64 = 5.0;

/// Domain keywords rewarded by the technical-depth score (substring match).
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "algorithm",
    "complexity",
    "latency",
    "throughput",
    "scale",
    "optimization",
    "database",
    "sql",
    "nosql",
    "docker",
    "kubernetes",
    "api",
    "concurrency",
    "threads",
    "profiling",
];

/// Words that indicate a Situation/Task/Action/Result structure.
pub const STAR_INDICATORS: &[&str] = &["situation", "task", "action", "result", "challenge", "outcome"];

/// Phrases that indicate the answer reports an outcome.
pub const OUTCOME_PHRASES: &[&str] = &["resulted in", "led to", "improved", "reduced", "increased", "success"];

const KEYWORD_WEIGHT: f64 = 1.0;
const METRIC_BONUS: f64 = 2.0;
const ACTION_BONUS: f64 = 1.0;

const FILLER_PENALTY_PER_WORD: f64 = 0.4;
const FILLER_PENALTY_CAP: f64 = 1.5;

const PARTIAL_EXAMPLES_BASE: f64 = 1.5;
const PARTIAL_EXAMPLES_CAP: f64 = 3.0;
const PARTIAL_EXAMPLES_WORDS: f64 = 80.0;

/// Scores for a single answer, before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnswerScore {
    pub communication: f64,
    pub technical: f64,
    pub examples: f64,
    pub word_count: usize,
    pub fillers: usize,
}

/// Stateless scorer for one answer.
pub struct AnswerScorer;

impl AnswerScorer {
    /// Scores one answer on all three axes.
    pub fn score(answer: &str) -> AnswerScore {
        let words = word_count(answer);
        let fillers = filler_count(answer);

        AnswerScore {
            communication: Self::communication(words, fillers),
            technical: Self::technical(answer),
            examples: Self::examples(answer, words),
            word_count: words,
            fillers,
        }
    }

    /// Word-count bucket minus a capped filler penalty.
    ///
    /// Very short answers score low; very long ones lose a little for rambling.
    pub fn communication(words: usize, fillers: usize) -> f64 {
        let base = match words {
            0..=14 => 2.0,
            15..=39 => 4.0,
            40..=79 => 4.5,
            _ => 3.5,
        };
        let penalty = (FILLER_PENALTY_PER_WORD * fillers as f64).min(FILLER_PENALTY_CAP);
        clamp_score(base - penalty)
    }

    /// Keyword, metric and action-verb bonuses.
    pub fn technical(answer: &str) -> f64 {
        let lower = answer.to_lowercase();
        let keywords = TECHNICAL_KEYWORDS
            .iter()
            .filter(|kw| lower.contains(*kw))
            .count() as f64;

        let mut score = keywords * KEYWORD_WEIGHT;
        if has_metric(answer) {
            score += METRIC_BONUS;
        }
        if has_action_verb(answer) {
            score += ACTION_BONUS;
        }
        clamp_score(score)
    }

    /// Full marks for STAR structure or an outcome phrase, otherwise a
    /// length-scaled partial score that never reaches full marks.
    pub fn examples(answer: &str, words: usize) -> f64 {
        if Self::has_star_structure(answer) {
            return MAX_SCORE;
        }
        let partial = PARTIAL_EXAMPLES_BASE + (words as f64 / PARTIAL_EXAMPLES_WORDS) * MAX_SCORE;
        clamp_score(partial.min(PARTIAL_EXAMPLES_CAP))
    }

    /// Returns true if the answer carries a STAR indicator or outcome phrase.
    pub fn has_star_structure(answer: &str) -> bool {
        contains_phrase(answer, STAR_INDICATORS) || contains_phrase(answer, OUTCOME_PHRASES)
    }
}

/// Clamps a score into `[0, MAX_SCORE]`, mapping NaN to zero.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    mod communication {
        use super::*;

        #[test]
        fn buckets_by_word_count() {
            assert_eq!(AnswerScorer::communication(3, 0), 2.0);
            assert_eq!(AnswerScorer::communication(15, 0), 4.0);
            assert_eq!(AnswerScorer::communication(40, 0), 4.5);
            assert_eq!(AnswerScorer::communication(80, 0), 3.5);
        }

        #[test]
        fn fillers_reduce_score() {
            assert!((AnswerScorer::communication(20, 2) - 3.2).abs() < 1e-9);
        }

        #[test]
        fn filler_penalty_is_capped() {
            assert_eq!(AnswerScorer::communication(20, 50), 2.5);
        }

        #[test]
        fn never_negative() {
            assert!(AnswerScorer::communication(0, 100) >= 0.0);
        }
    }

    mod technical {
        use super::*;

        #[test]
        fn caching_answer_scores_above_three_and_a_half() {
            let score = AnswerScorer::technical("I built a caching layer and reduced latency by 40%");
            assert_eq!(score, 4.0);
        }

        #[test]
        fn keywords_accumulate() {
            let score = AnswerScorer::technical("database and docker");
            assert_eq!(score, 2.0);
        }

        #[test]
        fn capped_at_five() {
            let score = AnswerScorer::technical(
                "I optimized the database algorithm, profiling threads on kubernetes at scale, 50 ms",
            );
            assert_eq!(score, MAX_SCORE);
        }

        #[test]
        fn plain_text_scores_zero() {
            assert_eq!(AnswerScorer::technical("I like turtles"), 0.0);
        }
    }

    mod examples {
        use super::*;

        #[test]
        fn outcome_phrase_gives_full_marks() {
            assert_eq!(AnswerScorer::examples("that led to fewer outages", 5), MAX_SCORE);
        }

        #[test]
        fn star_indicator_gives_full_marks() {
            assert_eq!(AnswerScorer::examples("The Situation was tense", 4), MAX_SCORE);
        }

        #[test]
        fn partial_score_scales_with_length() {
            let short = AnswerScorer::examples(&words(8), 8);
            let longer = AnswerScorer::examples(&words(16), 16);
            assert!((short - 2.0).abs() < 1e-9);
            assert!((longer - 2.5).abs() < 1e-9);
        }

        #[test]
        fn partial_score_never_reaches_full_marks() {
            assert_eq!(AnswerScorer::examples(&words(500), 500), 3.0);
        }
    }

    #[test]
    fn score_collects_counts() {
        let score = AnswerScorer::score("Um, so I fixed it");
        assert_eq!(score.word_count, 5);
        assert_eq!(score.fillers, 2);
    }

    #[test]
    fn clamp_handles_nan() {
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(-1.0), 0.0);
        assert_eq!(clamp_score(9.0), MAX_SCORE);
    }
}
