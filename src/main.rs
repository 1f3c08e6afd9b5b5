//! Interview Partner - terminal practice loop.
//!
//! Reads one line per answer from stdin. Commands: `/skip`, `/restart`,
//! `/quit`. When the session ends the transcript is saved and the feedback
//! report is printed as JSON.
//!
//! `interview-partner score <session-id>` re-scores a saved transcript.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use interview_partner::adapters::JsonTranscriptStore;
use interview_partner::application::{
    FinishInterviewHandler, ScoreTranscriptCommand, ScoreTranscriptHandler, SkipQuestionHandler,
    SubmitAnswerCommand, SubmitAnswerHandler,
};
use interview_partner::config::{AppConfig, LoggingConfig};
use interview_partner::domain::foundation::{DomainError, SessionId};
use interview_partner::domain::interview::{InterviewEngine, Persona, QuestionCatalog, TurnOutcome};

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {err}");
        return ExitCode::FAILURE;
    }

    init_tracing(&config.logging);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [] => run(&config),
        [command, session_id] if command == "score" => score(&config, session_id),
        _ => {
            eprintln!("Usage: interview-partner [score <session-id>]");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = %err.code, error = %err, "Interview session failed");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never interleave with the dialogue on stdout.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(config: &AppConfig) -> Result<(), DomainError> {
    let mut engine = InterviewEngine::new(
        &config.interview.role,
        &config.interview.persona,
        config.interview.question_count,
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(
        out,
        "Mock interview: {} ({} questions, {} interviewer)",
        engine.role(),
        engine.questions().len(),
        engine.persona().name()
    )?;
    writeln!(out, "Roles: {}", QuestionCatalog::available_roles().join(", "))?;
    writeln!(out, "Personas: {}", Persona::available().join(", "))?;
    writeln!(out, "Commands: /skip, /restart, /quit\n")?;

    if let Some(question) = engine.ask_current() {
        writeln!(out, "Interviewer: {question}")?;
    }

    let submit = SubmitAnswerHandler::new();
    let skip = SkipQuestionHandler::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let outcome = match line.trim() {
            "/quit" => break,
            "/skip" => skip.handle(&mut engine),
            "/restart" => {
                engine.start();
                match engine.ask_current() {
                    Some(question) => TurnOutcome::Next(question),
                    None => TurnOutcome::Done,
                }
            }
            "" => {
                writeln!(out, "Please type an answer, or /skip to move on.")?;
                continue;
            }
            answer => match submit.handle(&mut engine, SubmitAnswerCommand::new(answer)) {
                Ok(outcome) => outcome,
                Err(err) => {
                    writeln!(out, "{}", DomainError::from(err).message)?;
                    continue;
                }
            },
        };

        match outcome {
            TurnOutcome::FollowUp(prompt) | TurnOutcome::Next(prompt) => {
                writeln!(out, "Interviewer: {prompt}")?;
            }
            TurnOutcome::Done => {
                if let Some(closing) = engine.events().last() {
                    writeln!(out, "Interviewer: {}", closing.text)?;
                }
                break;
            }
        }
    }

    let store = JsonTranscriptStore::new(config.storage.transcript_path());
    let finish = FinishInterviewHandler::new(Arc::new(store.clone()))
        .with_saving(config.storage.save_transcripts);
    let result = finish.handle(&engine)?;

    if result.saved {
        info!(
            path = %store.transcript_path(result.session_id).display(),
            "Transcript saved"
        );
    }

    writeln!(out, "\n{}", serde_json::to_string_pretty(&result.report)?)?;
    Ok(())
}

fn score(config: &AppConfig, session_id: &str) -> Result<(), DomainError> {
    let session_id: SessionId = session_id.parse().map_err(|err| {
        DomainError::validation("session_id", format!("Invalid session id: {}", err))
    })?;

    let store = JsonTranscriptStore::new(config.storage.transcript_path());
    let report = ScoreTranscriptHandler::new(Arc::new(store))
        .handle(ScoreTranscriptCommand { session_id })?;

    let stdout = io::stdout();
    writeln!(stdout.lock(), "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}
