//! Interview question value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of question being asked.
///
/// The category changes which follow-ups make sense: a technical question
/// expects numbers, a behavioral one expects a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Behavioral,
    Technical,
    Roleplay,
    Situational,
}

impl QuestionCategory {
    /// Returns the lowercase tag used in serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Behavioral => "behavioral",
            QuestionCategory::Technical => "technical",
            QuestionCategory::Roleplay => "roleplay",
            QuestionCategory::Situational => "situational",
        }
    }

    pub fn is_technical(&self) -> bool {
        matches!(self, QuestionCategory::Technical)
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable interview question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: String,
    prompt: String,
    category: QuestionCategory,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        category: QuestionCategory,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            category,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn category(&self) -> QuestionCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_to_snake_case() {
        let json = serde_json::to_string(&QuestionCategory::Roleplay).unwrap();
        assert_eq!(json, "\"roleplay\"");
    }

    #[test]
    fn only_technical_is_technical() {
        assert!(QuestionCategory::Technical.is_technical());
        assert!(!QuestionCategory::Behavioral.is_technical());
        assert!(!QuestionCategory::Situational.is_technical());
    }

    #[test]
    fn accessors_return_constructor_values() {
        let q = Question::new("qa-1", "How do you test?", QuestionCategory::Technical);
        assert_eq!(q.id(), "qa-1");
        assert_eq!(q.prompt(), "How do you test?");
        assert_eq!(q.category(), QuestionCategory::Technical);
    }
}
