//! Interview session configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::interview::{DEFAULT_PERSONA, DEFAULT_ROLE};

/// Largest question count accepted from configuration.
pub const MAX_QUESTION_COUNT: usize = 20;

/// Interview session defaults
#[derive(Debug, Clone, Deserialize)]
pub struct InterviewConfig {
    /// Role to interview for (unknown roles fall back at session start)
    #[serde(default = "default_role")]
    pub role: String,

    /// Interviewer persona
    #[serde(default = "default_persona")]
    pub persona: String,

    /// Questions per session; the engine also clamps to the role's catalog
    #[serde(default = "default_question_count")]
    pub question_count: usize,
}

impl InterviewConfig {
    /// Validate interview configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.question_count == 0 || self.question_count > MAX_QUESTION_COUNT {
            return Err(ValidationError::InvalidQuestionCount(self.question_count));
        }
        Ok(())
    }
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            role: default_role(),
            persona: default_persona(),
            question_count: default_question_count(),
        }
    }
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

fn default_persona() -> String {
    DEFAULT_PERSONA.to_string()
}

fn default_question_count() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interview_config_defaults() {
        let config = InterviewConfig::default();
        assert_eq!(config.role, "Software Developer");
        assert_eq!(config.persona, "balanced");
        assert_eq!(config.question_count, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_question_count_bounds() {
        let mut config = InterviewConfig::default();

        config.question_count = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidQuestionCount(0))
        ));

        config.question_count = 21;
        assert!(config.validate().is_err());

        config.question_count = 20;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_interview_config_deserialization() {
        let json = r#"{"role": "QA Engineer", "question_count": 3}"#;
        let config: InterviewConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.role, "QA Engineer");
        assert_eq!(config.persona, "balanced");
        assert_eq!(config.question_count, 3);
    }
}
