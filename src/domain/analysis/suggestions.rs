//! Suggestion rules.
//!
//! Rules run in a fixed order (communication, technical, examples, filler
//! density, closing tip) so the same scores always yield the same list.

/// Communication below this gets a clarity suggestion.
pub const COMMUNICATION_THRESHOLD: f64 = 3.5;

/// Technical depth below this gets a depth suggestion.
pub const TECHNICAL_THRESHOLD: f64 = 3.0;

/// Examples below this gets a STAR suggestion.
pub const EXAMPLES_THRESHOLD: f64 = 3.0;

/// Average fillers per answer above this gets a filler suggestion.
pub const FILLER_RATIO_THRESHOLD: f64 = 1.5;

pub const COMMUNICATION_WEAK: &str = "Work on clarity: prefer the STAR structure and aim for ~40-80 words. Reduce filler words and keep sentences crisp.";
pub const COMMUNICATION_STRONG: &str =
    "Communication is strong. Maintain concise structure and explicit outcomes.";
pub const TECHNICAL_WEAK: &str = "Increase technical depth: mention concrete technologies, algorithmic tradeoffs, and measurable results.";
pub const TECHNICAL_STRONG: &str = "Technical depth is good. Add more metrics when possible.";
pub const EXAMPLES_WEAK: &str =
    "Use STAR more consistently and quantify the results (e.g., 'improved X by 30%').";
pub const EXAMPLES_STRONG: &str =
    "Good use of examples. Make sure you highlight your personal contribution.";
pub const FILLER_HEAVY: &str =
    "You use several filler words on average. Practice pausing instead of using 'um'/'like'.";
pub const CLOSING_TIP: &str =
    "Practice answering out loud and review your transcript to spot patterns between sessions.";

/// Aggregated inputs to the suggestion rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionInputs {
    pub communication: f64,
    pub technical: f64,
    pub examples: f64,
    pub avg_fillers_per_answer: f64,
}

/// Builds the ordered suggestion list.
pub fn build_suggestions(inputs: &SuggestionInputs) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(5);

    suggestions.push(pick(
        inputs.communication < COMMUNICATION_THRESHOLD,
        COMMUNICATION_WEAK,
        COMMUNICATION_STRONG,
    ));
    suggestions.push(pick(
        inputs.technical < TECHNICAL_THRESHOLD,
        TECHNICAL_WEAK,
        TECHNICAL_STRONG,
    ));
    suggestions.push(pick(
        inputs.examples < EXAMPLES_THRESHOLD,
        EXAMPLES_WEAK,
        EXAMPLES_STRONG,
    ));

    if inputs.avg_fillers_per_answer > FILLER_RATIO_THRESHOLD {
        suggestions.push(FILLER_HEAVY.to_string());
    }

    suggestions.push(CLOSING_TIP.to_string());
    suggestions
}

fn pick(weak: bool, weak_text: &str, strong_text: &str) -> String {
    if weak { weak_text } else { strong_text }.to_string()
}
