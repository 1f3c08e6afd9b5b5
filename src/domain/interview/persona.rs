//! Interviewer personas.
//!
//! A persona fixes two things for a whole session: the phrasing style of
//! follow-ups and how many follow-ups a single question may receive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phrasing style for follow-up prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpStyle {
    /// Patient, checks understanding before moving on.
    Clarify,
    /// Short prompts, few probes.
    Concise,
    /// Curious, asks why and digs into choices.
    Explore,
    /// Keeps the candidate on topic and tied to the role.
    Boundary,
    #[default]
    Balanced,
}

impl FollowUpStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowUpStyle::Clarify => "clarify",
            FollowUpStyle::Concise => "concise",
            FollowUpStyle::Explore => "explore",
            FollowUpStyle::Boundary => "boundary",
            FollowUpStyle::Balanced => "balanced",
        }
    }

    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "clarify" => Some(FollowUpStyle::Clarify),
            "concise" => Some(FollowUpStyle::Concise),
            "explore" => Some(FollowUpStyle::Explore),
            "boundary" => Some(FollowUpStyle::Boundary),
            "balanced" => Some(FollowUpStyle::Balanced),
            _ => None,
        }
    }
}

impl fmt::Display for FollowUpStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable persona configuration selected once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    name: String,
    style: FollowUpStyle,
    max_followups: u32,
}

/// Persona used when the requested one is unknown.
pub const DEFAULT_PERSONA: &str = "balanced";

const PRESETS: &[(&str, FollowUpStyle, u32)] = &[
    ("balanced", FollowUpStyle::Balanced, 2),
    ("confused", FollowUpStyle::Clarify, 2),
    ("efficient", FollowUpStyle::Concise, 1),
    ("curious", FollowUpStyle::Explore, 3),
    ("chatty", FollowUpStyle::Boundary, 1),
];

impl Persona {
    /// Creates a custom persona.
    pub fn new(name: impl Into<String>, style: FollowUpStyle, max_followups: u32) -> Self {
        Self {
            name: name.into(),
            style,
            max_followups,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> FollowUpStyle {
        self.style
    }

    pub fn max_followups(&self) -> u32 {
        self.max_followups
    }

    /// Names of the built-in presets, default first.
    pub fn available() -> Vec<&'static str> {
        PRESETS.iter().map(|(name, _, _)| *name).collect()
    }

    /// Looks up a preset by name or by style tag, ignoring case.
    pub fn lookup(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        PRESETS
            .iter()
            .find(|(preset, _, _)| *preset == wanted)
            .or_else(|| {
                let style = FollowUpStyle::parse(&wanted)?;
                PRESETS.iter().find(|(_, s, _)| *s == style)
            })
            .map(|(preset, style, cap)| Persona::new(*preset, *style, *cap))
    }

    /// Resolves a persona, falling back to the balanced preset when unknown.
    ///
    /// The boolean is true when the fallback was used.
    pub fn resolve(name: &str) -> (Self, bool) {
        match Self::lookup(name) {
            Some(persona) => (persona, false),
            None => (Self::default(), true),
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Persona::new(DEFAULT_PERSONA, FollowUpStyle::Balanced, 2)
    }
}
