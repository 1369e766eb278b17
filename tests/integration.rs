// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for ais2txt parsing and rendering.

use ais2txt::{Outcome, format_conversation};
use std::fs;

/// The worked example: a user turn, a model thought, and a model reply.
#[test]
fn formats_full_conversation_exactly() {
    let json = r#"{"chunkedPrompt":{"chunks":[{"role":"user","text":"Hi"},{"role":"model","text":"Thinking...","isThought":true},{"role":"model","text":"Hello!"}]}}"#;

    let expected = "\
###user output starts###
Hi
above is from - user
###user output end###

###model thoughts starts###
Thinking...
above is the thoughts of the model
###model thoughts end###

###model output starts###
Hello!
###model output end###";

    assert_eq!(
        format_conversation(json),
        Outcome::Transcript(expected.into())
    );
}

/// Skipped chunks drop out of the transcript without disturbing their
/// neighbors.
#[test]
fn skipped_chunks_leave_no_trace() {
    let json = r#"{
        "chunkedPrompt": {
            "chunks": [
                {"role": "user", "text": "kept"},
                {"role": "system", "text": "instructions"},
                {"text": "no role"},
                {"role": "model", "text": null},
                {"role": "model", "text": "also kept"}
            ]
        }
    }"#;

    let Outcome::Transcript(text) = format_conversation(json) else {
        panic!("expected a transcript");
    };

    assert!(text.contains("kept"));
    assert!(text.contains("also kept"));
    assert!(!text.contains("instructions"));
    assert!(!text.contains("no role"));
    assert_eq!(text.matches("starts###").count(), 2);
}

/// Malformed input yields a diagnostic with no transcript markers in it.
#[test]
fn malformed_json_yields_diagnostic() {
    let outcome = format_conversation("{not json");

    let Outcome::Diagnostic(message) = outcome else {
        panic!("expected a diagnostic");
    };

    assert!(message.contains("failed to decode JSON"));
    assert!(!message.contains("###"));
}

/// A parsed document with the wrong top-level kind is also a diagnostic.
#[test]
fn unexpected_shape_yields_diagnostic() {
    let outcome = format_conversation(r#""just a string""#);

    assert!(!outcome.is_transcript());
}

/// An export with no chunks formats to an empty transcript, which the
/// persistence gate treats as not worth writing.
#[test]
fn empty_export_fails_persistence_gate() {
    let outcome = format_conversation("{}");

    assert_eq!(outcome, Outcome::Transcript(String::new()));

    let worth_persisting = match &outcome {
        Outcome::Transcript(text) => !text.is_empty(),
        Outcome::Diagnostic(_) => false,
    };
    assert!(!worth_persisting);
}

/// A real transcript passes the persistence gate, and the gate agrees with
/// the marker-presence heuristic it replaces.
#[test]
fn transcript_passes_persistence_gate() {
    let json = r#"{"chunkedPrompt":{"chunks":[{"role":"model","text":"Hello!"}]}}"#;
    let outcome = format_conversation(json);

    let Outcome::Transcript(text) = &outcome else {
        panic!("expected a transcript");
    };
    assert!(outcome.is_transcript() && !text.is_empty());
    assert!(text.contains("###model output starts###"));
}

/// Turn text passes through verbatim, including content that looks like the
/// markers themselves.
#[test]
fn text_is_not_escaped() {
    let json = r#"{
        "chunkedPrompt": {
            "chunks": [
                {"role": "user", "text": "line one\nline two with ###markers### and <tags>"}
            ]
        }
    }"#;

    let Outcome::Transcript(text) = format_conversation(json) else {
        panic!("expected a transcript");
    };

    assert!(text.contains("line one\nline two with ###markers### and <tags>"));
}

/// Reads an export from disk the way the CLI does before formatting it.
#[test]
fn formats_export_read_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conversation.json");
    fs::write(
        &path,
        r#"{"chunkedPrompt":{"chunks":[{"role":"user","text":"Hi from disk"}]}}"#,
    )
    .unwrap();

    let json = fs::read_to_string(&path).unwrap();
    let Outcome::Transcript(text) = format_conversation(&json) else {
        panic!("expected a transcript");
    };

    assert!(text.contains("Hi from disk"));
    assert!(text.starts_with("###user output starts###"));
}
