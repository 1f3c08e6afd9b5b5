//! Lexical signals shared by the interview and analysis modules.
//!
//! Both the follow-up policy and the answer scorer read free text through
//! these helpers, so the two engines always agree on what counts as a
//! metric, a filler word or an action verb.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a bare percentage or a number followed by a time/size unit.
pub static METRIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d+%|\b\d+\s*(ms|s|seconds|minutes|hours|GB|MB)\b")
        .expect("metric pattern is a valid regex")
});

/// Filler words and phrases counted against communication.
pub const FILLER_WORDS: &[&str] = &[
    "um", "uh", "like", "you know", "so", "actually", "basically", "right", "okay", "hmm",
];

// Multi-word phrases first so "you know" wins over any shorter overlap.
static FILLER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(you\s+know|um|uh|like|so|actually|basically|right|okay|hmm)\b")
        .expect("filler pattern is a valid regex")
});

/// Verbs that signal the candidate did something concrete.
pub const ACTION_VERBS: &[&str] = &[
    "built",
    "designed",
    "implemented",
    "reduced",
    "improved",
    "fixed",
    "led",
    "created",
    "optimized",
];

/// Pronouns that attribute work to a group.
pub const TEAM_PRONOUNS: &[&str] = &["we", "our", "us", "team"];

/// Pronouns that attribute work to the speaker.
pub const FIRST_PERSON_PRONOUNS: &[&str] =
    &["i", "i'm", "i've", "i'd", "i'll", "me", "my", "myself"];

/// Counts whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Lowercased word tokens with surrounding punctuation removed.
///
/// Apostrophes are kept so contractions such as "i'm" survive intact.
pub fn tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('\u{2019}', "'")
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns true if the text contains a percentage or a quantity with a unit.
pub fn has_metric(text: &str) -> bool {
    METRIC_PATTERN.is_match(text)
}

/// Counts filler-word occurrences, case-insensitively, on word boundaries.
pub fn filler_count(text: &str) -> usize {
    FILLER_PATTERN.find_iter(text).count()
}

/// Returns true if any token is one of the action verbs.
pub fn has_action_verb(text: &str) -> bool {
    contains_token(text, ACTION_VERBS)
}

/// Returns true if the text uses team pronouns without any first-person pronoun.
pub fn team_without_first_person(text: &str) -> bool {
    let tokens = tokens(text);
    let team = tokens.iter().any(|t| TEAM_PRONOUNS.contains(&t.as_str()));
    let first_person = tokens
        .iter()
        .any(|t| FIRST_PERSON_PRONOUNS.contains(&t.as_str()));
    team && !first_person
}

/// Returns true if any token of `text` appears in `words`.
pub fn contains_token(text: &str, words: &[&str]) -> bool {
    tokens(text).iter().any(|t| words.contains(&t.as_str()))
}

/// Returns true if the lowercased text contains any of the phrases.
pub fn contains_phrase(text: &str, phrases: &[&str]) -> bool {
    let lower = text.to_lowercase().replace('\u{2019}', "'");
    phrases.iter().any(|p| lower.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod metrics {
        use super::*;

        #[test]
        fn detects_percentage() {
            assert!(has_metric("reduced latency by 40%"));
        }

        #[test]
        fn detects_units_case_insensitively() {
            assert!(has_metric("p99 dropped to 120 ms"));
            assert!(has_metric("saved 3 Hours per week"));
            assert!(has_metric("freed 2GB of memory"));
            assert!(has_metric("took 5 s"));
            assert!(has_metric("about 10 minutes"));
        }

        #[test]
        fn ignores_bare_numbers() {
            assert!(!has_metric("we had 3 services"));
            assert!(!has_metric("version 2 shipped"));
        }

        #[test]
        fn ignores_unit_glued_to_words() {
            // "5 second" is not in the unit list, only "seconds" and "s".
            assert!(!has_metric("in 5 second intervals"));
        }
    }

    mod fillers {
        use super::*;

        #[test]
        fn counts_whole_words_only() {
            assert_eq!(filler_count("I also liked the bright side"), 0);
        }

        #[test]
        fn counts_phrases_and_words() {
            assert_eq!(filler_count("Um, you know, it was like, basically done"), 4);
        }

        #[test]
        fn is_case_insensitive() {
            assert_eq!(filler_count("OKAY so HMM"), 3);
        }

        #[test]
        fn lexicon_matches_pattern() {
            for filler in FILLER_WORDS {
                assert_eq!(filler_count(filler), 1, "{filler} should count once");
            }
        }
    }

    mod pronouns {
        use super::*;

        #[test]
        fn team_only_is_flagged() {
            assert!(team_without_first_person("We fixed it together"));
        }

        #[test]
        fn first_person_clears_flag() {
            assert!(!team_without_first_person("We fixed it and I wrote the patch"));
            assert!(!team_without_first_person("Our team shipped it, I'm proud of my part"));
        }

        #[test]
        fn curly_apostrophes_are_normalized() {
            assert!(!team_without_first_person("We did it and I\u{2019}m the one who led"));
        }

        #[test]
        fn no_pronouns_is_not_flagged() {
            assert!(!team_without_first_person("Fixed the cache"));
        }
    }

    #[test]
    fn action_verbs_match_on_token_boundaries() {
        assert!(has_action_verb("I optimized the query"));
        assert!(!has_action_verb("The rebuilt house"));
    }

    #[test]
    fn word_count_splits_on_whitespace() {
        assert_eq!(word_count("  one two\tthree\nfour "), 4);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn tokens_strip_punctuation() {
        assert_eq!(tokens("Hello, I'm here!"), vec!["hello", "i'm", "here"]);
    }
}
