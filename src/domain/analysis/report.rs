//! Feedback report types.
//!
//! Field names are a stable contract: consumers render or store the JSON
//! form verbatim.

use serde::{Deserialize, Serialize};

/// Error text carried by a report for a transcript with no answers.
pub const NO_ANSWERS_ERROR: &str = "No user answers in transcript.";

/// Aggregate statistics over all answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub answers_count: usize,
    /// Rounded to 1 decimal.
    pub avg_words: f64,
    /// Rounded to 2 decimals.
    pub avg_fillers_per_answer: f64,
}

/// Scores and suggestions for a transcript with at least one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub communication: f64,
    pub technical: f64,
    pub examples: f64,
    pub composite: f64,
    pub meta: ReportMeta,
    /// In rule order; not deduplicated.
    pub suggestions: Vec<String>,
}

/// Result of scoring a transcript.
///
/// Serialises untagged, so a transcript without answers becomes
/// `{"error": "No user answers in transcript."}` with no numeric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InterviewReport {
    Scored(FeedbackReport),
    NoAnswers { error: String },
}

impl InterviewReport {
    pub fn no_answers() -> Self {
        InterviewReport::NoAnswers {
            error: NO_ANSWERS_ERROR.to_string(),
        }
    }

    /// Returns the scored report, if any.
    pub fn scored(&self) -> Option<&FeedbackReport> {
        match self {
            InterviewReport::Scored(report) => Some(report),
            InterviewReport::NoAnswers { .. } => None,
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self, InterviewReport::Scored(_))
    }

    /// Returns the error text for an unscored report.
    pub fn error(&self) -> Option<&str> {
        match self {
            InterviewReport::Scored(_) => None,
            InterviewReport::NoAnswers { error } => Some(error),
        }
    }
}

/// Rounds half away from zero to `decimals` places.
///
/// Exact ties go up in magnitude (`0.125` becomes `0.13`), unlike
/// banker's rounding, which would give `0.12`. Only exact binary ties
/// differ between the two modes.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> FeedbackReport {
        FeedbackReport {
            communication: 4.0,
            technical: 2.5,
            examples: 5.0,
            composite: 3.73,
            meta: ReportMeta {
                answers_count: 1,
                avg_words: 10.0,
                avg_fillers_per_answer: 0.0,
            },
            suggestions: vec!["Keep going.".to_string()],
        }
    }

    #[test]
    fn scored_report_serializes_flat() {
        let json = serde_json::to_value(InterviewReport::Scored(sample())).unwrap();
        assert_eq!(json["communication"], json!(4.0));
        assert_eq!(json["meta"]["answers_count"], json!(1));
        assert_eq!(json["suggestions"], json!(["Keep going."]));
        assert!(json.get("error").is_none());
    }

    #[test]
    fn no_answers_serializes_as_error_only() {
        let json = serde_json::to_value(InterviewReport::no_answers()).unwrap();
        assert_eq!(json, json!({"error": "No user answers in transcript."}));
    }

    #[test]
    fn deserializes_both_shapes() {
        let scored: InterviewReport =
            serde_json::from_value(serde_json::to_value(InterviewReport::Scored(sample())).unwrap())
                .unwrap();
        assert!(scored.is_scored());

        let empty: InterviewReport =
            serde_json::from_value(json!({"error": "No user answers in transcript."})).unwrap();
        assert_eq!(empty.error(), Some(NO_ANSWERS_ERROR));
        assert!(empty.scored().is_none());
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.25, 1), 2.3);
        assert_eq!(round_to(7.0, 2), 7.0);
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-0.125, 2), -0.13);
    }
}
