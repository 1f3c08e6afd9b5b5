//! Interview session state machine.
//!
//! A session is either in progress at some question index or complete.
//! The only way out of `Complete` is an explicit restart, which builds a
//! fresh state rather than transitioning.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The lifecycle state of an interview session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InterviewState {
    /// Asking (or following up on) the question at `question_index`.
    InProgress { question_index: usize },

    /// All questions done, closing message appended.
    Complete,
}

impl Default for InterviewState {
    fn default() -> Self {
        InterviewState::InProgress { question_index: 0 }
    }
}

impl InterviewState {
    /// Returns true if the session still accepts answers.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, Self::InProgress { .. })
    }

    /// Returns the active question index, if any.
    pub fn question_index(&self) -> Option<usize> {
        match self {
            Self::InProgress { question_index } => Some(*question_index),
            Self::Complete => None,
        }
    }
}

impl StateMachine for InterviewState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use InterviewState::*;
        match (self, target) {
            // Follow-up keeps the index; advance moves it by exactly one.
            (InProgress { question_index: from }, InProgress { question_index: to }) => {
                *to == *from || *to == *from + 1
            }
            (InProgress { .. }, Complete) => true,
            (Complete, _) => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use InterviewState::*;
        match self {
            InProgress { question_index } => vec![
                InProgress {
                    question_index: *question_index,
                },
                InProgress {
                    question_index: *question_index + 1,
                },
                Complete,
            ],
            Complete => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(question_index: usize) -> InterviewState {
        InterviewState::InProgress { question_index }
    }

    mod state_definition {
        use super::*;

        #[test]
        fn default_state_is_first_question() {
            assert_eq!(InterviewState::default(), at(0));
        }

        #[test]
        fn serializes_with_state_tag() {
            let json = serde_json::to_string(&at(2)).unwrap();
            assert_eq!(json, r#"{"state":"in_progress","question_index":2}"#);
            let json = serde_json::to_string(&InterviewState::Complete).unwrap();
            assert_eq!(json, r#"{"state":"complete"}"#);
        }

        #[test]
        fn only_in_progress_accepts_answers() {
            assert!(at(3).accepts_answers());
            assert!(!InterviewState::Complete.accepts_answers());
        }

        #[test]
        fn question_index_is_exposed_while_in_progress() {
            assert_eq!(at(4).question_index(), Some(4));
            assert_eq!(InterviewState::Complete.question_index(), None);
        }
    }

    mod state_machine_trait {
        use super::*;

        #[test]
        fn follow_up_stays_on_same_index() {
            assert!(at(1).can_transition_to(&at(1)));
        }

        #[test]
        fn advance_moves_by_one() {
            assert!(at(1).can_transition_to(&at(2)));
        }

        #[test]
        fn cannot_skip_or_go_back() {
            assert!(!at(1).can_transition_to(&at(3)));
            assert!(!at(2).can_transition_to(&at(1)));
        }

        #[test]
        fn in_progress_can_complete() {
            assert!(at(0).can_transition_to(&InterviewState::Complete));
        }

        #[test]
        fn complete_is_terminal() {
            let state = InterviewState::Complete;
            assert!(state.is_terminal());
            assert!(state.transition_to(at(0)).is_err());
        }

        #[test]
        fn valid_transitions_matches_can_transition_to() {
            for state in [at(0), at(5), InterviewState::Complete] {
                for target in state.valid_transitions() {
                    assert!(
                        state.can_transition_to(&target),
                        "can_transition_to should return true for {:?} -> {:?}",
                        state,
                        target
                    );
                }
            }
        }
    }
}
