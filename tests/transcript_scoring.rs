//! Integration tests for the transcript persistence and scoring flow.
//!
//! These tests verify the end-to-end flow:
//! 1. A session is driven to completion
//! 2. FinishInterviewHandler saves the transcript as JSON and scores it
//! 3. ScoreTranscriptHandler reloads the file and produces the same report
//!
//! Uses a temporary directory so no state leaks between tests.

use std::fs;
use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;

use interview_partner::adapters::{read_transcript, write_transcript, JsonTranscriptStore};
use interview_partner::application::{
    FinishInterviewHandler, ScoreTranscriptCommand, ScoreTranscriptError, ScoreTranscriptHandler,
};
use interview_partner::domain::analysis::{FeedbackAnalyzer, InterviewReport, CLOSING_TIP};
use interview_partner::domain::foundation::SessionId;
use interview_partner::domain::interview::{InterviewEngine, SessionEvent};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn completed_session() -> InterviewEngine {
    let mut engine = InterviewEngine::new("Backend Engineer", "efficient", 2);
    engine.ask_current();
    for text in [
        "I built a caching layer and reduced latency by 40%",
        "Um, so, like, we basically added more servers",
        "I designed the API around idempotent writes and the outcome was zero duplicate orders",
        "I don't know",
    ] {
        engine.process_answer(text).unwrap();
    }
    assert!(engine.is_complete());
    engine
}

// =============================================================================
// Save and Reload
// =============================================================================

#[test]
fn finished_session_round_trips_through_json_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(JsonTranscriptStore::new(temp_dir.path()));
    let engine = completed_session();

    let finished = FinishInterviewHandler::new(store.clone()).handle(&engine).unwrap();
    let rescored = ScoreTranscriptHandler::new(store.clone())
        .handle(ScoreTranscriptCommand {
            session_id: finished.session_id,
        })
        .unwrap();

    assert!(finished.saved);
    assert_eq!(finished.report, rescored);
    assert!(store.transcript_path(engine.session_id()).exists());
}

#[test]
fn saved_file_matches_interchange_shape() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(JsonTranscriptStore::new(temp_dir.path()));
    let engine = completed_session();

    FinishInterviewHandler::new(store.clone()).handle(&engine).unwrap();

    let raw = fs::read_to_string(store.transcript_path(engine.session_id())).unwrap();
    let parsed: Value = serde_json::from_str(&raw).unwrap();
    let entries = parsed.as_array().unwrap();

    assert_eq!(entries.len(), engine.events().len());
    for (entry, event) in entries.iter().zip(engine.events()) {
        let object = entry.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["text"], json!(event.text));
        assert!(object["type"].is_string());
    }
    assert!(raw.contains("\n  {"), "expected two-space indentation");
}

#[test]
fn scoring_unknown_session_fails_with_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let handler = ScoreTranscriptHandler::new(Arc::new(JsonTranscriptStore::new(temp_dir.path())));

    let result = handler.handle(ScoreTranscriptCommand {
        session_id: SessionId::new(),
    });

    assert!(matches!(result, Err(ScoreTranscriptError::NotFound(_))));
}

// =============================================================================
// Reports From Hand-Written Transcripts
// =============================================================================

#[test]
fn report_json_uses_stable_field_names() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("transcript.json");
    fs::write(
        &path,
        r#"[
  {"type": "system", "text": "Interview started."},
  {"type": "agent", "text": "Tell me about a performance win."},
  {"type": "user", "text": "I built a caching layer and reduced latency by 40%"}
]"#,
    )
    .unwrap();

    let report = FeedbackAnalyzer::analyze(&read_transcript(&path).unwrap());
    let json = serde_json::to_value(&report).unwrap();

    for field in ["communication", "technical", "examples", "composite", "meta", "suggestions"] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
    assert_eq!(json["examples"], json!(5.0));
    assert!(json["technical"].as_f64().unwrap() > 3.5);
    assert_eq!(json["meta"]["answers_count"], json!(1));
    assert_eq!(json["suggestions"].as_array().unwrap().last().unwrap(), CLOSING_TIP);
}

#[test]
fn transcript_without_answers_reports_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.json");
    write_transcript(
        &path,
        &[
            SessionEvent::system("Interview started."),
            SessionEvent::agent("Tell me about yourself."),
        ],
    )
    .unwrap();

    let report = FeedbackAnalyzer::analyze(&read_transcript(&path).unwrap());

    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({"error": "No user answers in transcript."})
    );
    assert!(matches!(report, InterviewReport::NoAnswers { .. }));
}

#[test]
fn scoring_is_repeatable() {
    let engine = completed_session();

    let first = serde_json::to_string(&FeedbackAnalyzer::analyze(engine.events())).unwrap();
    let second = serde_json::to_string(&FeedbackAnalyzer::analyze(engine.events())).unwrap();

    assert_eq!(first, second);
}
