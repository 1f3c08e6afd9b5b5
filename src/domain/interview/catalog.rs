//! Static question catalog keyed by role.
//!
//! Sessions draw a fixed-size prefix of a seeded shuffle of their role's
//! questions. The seed comes from a SHA-256 digest of the resolved
//! (role, persona) pair, so identical parameters always replay the same
//! question order.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

use super::question::{Question, QuestionCategory};
use super::question::QuestionCategory::{Behavioral, Roleplay, Situational, Technical};

/// Role used when the requested role is not in the catalog.
pub const DEFAULT_ROLE: &str = "Software Developer";

type Entry = (&'static str, QuestionCategory, &'static str);

/// Questions for one role.
#[derive(Debug)]
pub struct RoleQuestions {
    pub role: &'static str,
    entries: &'static [Entry],
}

impl RoleQuestions {
    /// Number of questions available for this role.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All questions in catalog order.
    pub fn questions(&self) -> Vec<Question> {
        self.entries
            .iter()
            .map(|(id, category, prompt)| Question::new(*id, *prompt, *category))
            .collect()
    }
}

static CATALOG: &[RoleQuestions] = &[
    RoleQuestions {
        role: "Software Developer",
        entries: &[
            ("swe-1", Behavioral, "Tell me about a challenging bug you fixed recently."),
            ("swe-2", Technical, "How would you find and fix a memory leak in a long-running service?"),
            ("swe-3", Technical, "Describe how you would make a slow endpoint faster."),
            ("swe-4", Behavioral, "Tell me about a time you disagreed with a code review comment."),
            ("swe-5", Situational, "A release is due tomorrow and a critical test is flaky. What do you do?"),
            ("swe-6", Roleplay, "I'm a product manager asking for a feature by Friday. Walk me through your response."),
        ],
    },
    RoleQuestions {
        role: "Data Scientist",
        entries: &[
            ("ds-1", Technical, "Explain the difference between supervised and unsupervised learning."),
            ("ds-2", Technical, "How do you handle missing data in a training set?"),
            ("ds-3", Behavioral, "Tell me about an analysis that changed a business decision."),
            ("ds-4", Technical, "How would you detect and prevent overfitting?"),
            ("ds-5", Situational, "Stakeholders dispute the results of your A/B test. How do you respond?"),
            ("ds-6", Roleplay, "Explain a confusion matrix to me as if I were a non-technical executive."),
        ],
    },
    RoleQuestions {
        role: "Frontend Engineer",
        entries: &[
            ("fe-1", Technical, "How do you optimize performance in a React application?"),
            ("fe-2", Technical, "How do you approach accessibility when building a new component?"),
            ("fe-3", Behavioral, "Tell me about a UI you rebuilt and what you learned."),
            ("fe-4", Technical, "How would you reduce the bundle size of a large single-page app?"),
            ("fe-5", Situational, "Design hands you a mockup that is hard to implement responsively. What do you do?"),
            ("fe-6", Roleplay, "I'm a user reporting that the page is slow on my phone. Walk me through how you help."),
        ],
    },
    RoleQuestions {
        role: "Backend Engineer",
        entries: &[
            ("be-1", Technical, "Explain how you design a scalable API."),
            ("be-2", Technical, "How do you choose between a SQL and a NoSQL database?"),
            ("be-3", Technical, "How would you diagnose rising p99 latency in a service?"),
            ("be-4", Behavioral, "Tell me about an outage you handled and what changed afterwards."),
            ("be-5", Situational, "A downstream dependency starts timing out during peak traffic. What do you do?"),
            ("be-6", Roleplay, "I'm a frontend engineer who needs a breaking API change. Negotiate it with me."),
        ],
    },
    RoleQuestions {
        role: "Full Stack Engineer",
        entries: &[
            ("fs-1", Technical, "How do you manage state across a full-stack application?"),
            ("fs-2", Technical, "How do you keep frontend and backend contracts in sync?"),
            ("fs-3", Behavioral, "Tell me about a feature you owned end to end."),
            ("fs-4", Technical, "How would you add caching to a page that is slow to render?"),
            ("fs-5", Situational, "You have one week to ship a feature touching every layer. How do you plan it?"),
            ("fs-6", Roleplay, "I'm a founder who wants a rewrite in a new framework. Convince me either way."),
        ],
    },
    RoleQuestions {
        role: "Machine Learning Engineer",
        entries: &[
            ("mle-1", Technical, "Describe how you would handle model drift."),
            ("mle-2", Technical, "How do you take a model from a notebook to production?"),
            ("mle-3", Technical, "How would you cut inference latency for a large model?"),
            ("mle-4", Behavioral, "Tell me about a model that underperformed in production."),
            ("mle-5", Situational, "Your training pipeline's cost doubled this month. What do you investigate?"),
            ("mle-6", Roleplay, "I'm a compliance officer asking how your model makes decisions. Explain it to me."),
        ],
    },
    RoleQuestions {
        role: "Sales Associate",
        entries: &[
            ("sales-1", Roleplay, "How do you handle objections from customers?"),
            ("sales-2", Behavioral, "Tell me about a deal you closed that looked lost."),
            ("sales-3", Situational, "A customer asks for a discount you cannot give. What do you say?"),
            ("sales-4", Behavioral, "How do you prioritize leads when your pipeline is full?"),
            ("sales-5", Roleplay, "I'm a customer comparing you with a cheaper competitor. Pitch me."),
            ("sales-6", Behavioral, "Tell me about a time you missed a target and how you recovered."),
        ],
    },
    RoleQuestions {
        role: "Technical Support Engineer",
        entries: &[
            ("tse-1", Technical, "Tell me how you diagnose an unknown technical problem."),
            ("tse-2", Roleplay, "I'm an angry customer whose service is down. Handle the call."),
            ("tse-3", Behavioral, "Tell me about an issue you escalated and how you decided to."),
            ("tse-4", Technical, "How do you read logs to find the root cause of a failure?"),
            ("tse-5", Situational, "Ten tickets arrive at once about the same error. What do you do first?"),
            ("tse-6", Behavioral, "Tell me about documentation you wrote that reduced ticket volume."),
        ],
    },
    RoleQuestions {
        role: "QA Engineer",
        entries: &[
            ("qa-1", Technical, "How do you create an effective test plan?"),
            ("qa-2", Technical, "How do you decide what to automate and what to test manually?"),
            ("qa-3", Behavioral, "Tell me about a critical bug you caught before release."),
            ("qa-4", Technical, "How would you reduce the runtime of a slow test suite?"),
            ("qa-5", Situational, "A developer insists a bug you filed is expected behavior. What do you do?"),
            ("qa-6", Roleplay, "I'm a release manager asking whether we can ship today. Give me your assessment."),
        ],
    },
];

/// Read-only access to the role catalog.
pub struct QuestionCatalog;

impl QuestionCatalog {
    /// Returns all role names in catalog order.
    pub fn available_roles() -> Vec<&'static str> {
        CATALOG.iter().map(|r| r.role).collect()
    }

    /// Finds a role by name, ignoring case and surrounding whitespace.
    pub fn lookup(role: &str) -> Option<&'static RoleQuestions> {
        let wanted = role.trim();
        CATALOG.iter().find(|r| r.role.eq_ignore_ascii_case(wanted))
    }

    /// Returns the default role's questions.
    pub fn default_role() -> &'static RoleQuestions {
        // The default role is the first catalog entry.
        &CATALOG[0]
    }

    /// Resolves a role, falling back to the default role when unknown.
    ///
    /// The boolean is true when the fallback was used.
    pub fn resolve(role: &str) -> (&'static RoleQuestions, bool) {
        match Self::lookup(role) {
            Some(found) => (found, false),
            None => (Self::default_role(), true),
        }
    }

    /// Builds a session's question list: a seeded shuffle of the role's
    /// questions truncated to `count`.
    ///
    /// `count` is clamped to `1..=role.len()`. The shuffle runs on ChaCha8,
    /// whose output for a given seed does not change between `rand` releases.
    pub fn select(role: &RoleQuestions, persona: &str, count: usize) -> Vec<Question> {
        let mut questions = role.questions();
        let mut rng = ChaCha8Rng::seed_from_u64(shuffle_seed(role.role, persona));
        questions.shuffle(&mut rng);
        questions.truncate(count.clamp(1, role.len().max(1)));
        questions
    }
}

/// Derives a stable 64-bit seed from a (role, persona) pair.
pub fn shuffle_seed(role: &str, persona: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(role.as_bytes());
    hasher.update([0x1f]);
    hasher.update(persona.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
