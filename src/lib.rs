// SPDX-License-Identifier: GPL-3.0-only

//! Convert Google AI Studio conversation exports to delimited plain text.
//!
//! AI Studio saves a conversation as a JSON document whose turns live in a
//! `chunkedPrompt.chunks` array. Each chunk carries a speaker `role`
//! (`"user"` or `"model"`), the turn `text`, and an optional `isThought`
//! flag marking internal model reasoning. This crate:
//!
//! 1. Parses that JSON structure into typed Rust representations
//! 2. Renders the conversation as a flat transcript with marker lines
//!    delimiting each turn
//!
//! # Example
//!
//! ```
//! use ais2txt::{Outcome, format_conversation};
//!
//! let json = r#"{"chunkedPrompt":{"chunks":[{"role":"user","text":"Hi"}]}}"#;
//!
//! match format_conversation(json) {
//!     Outcome::Transcript(text) => assert!(text.starts_with("###user output starts###")),
//!     Outcome::Diagnostic(message) => panic!("unexpected: {message}"),
//! }
//! ```
//!
//! # Modules
//!
//! - [`parser`]: JSON parsing and type definitions for AI Studio exports
//! - [`renderer`]: plain-text transcript generation

#![deny(missing_docs)]

pub mod parser;
pub mod renderer;

/// The result of formatting one conversation export.
///
/// Parse and shape failures are normal, reportable outcomes rather than
/// errors: callers branch on the variant instead of catching anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A rendered transcript. Empty when the export held no renderable chunks.
    Transcript(String),
    /// A one-line description of why no transcript could be produced
    /// (malformed JSON or an unexpected top-level shape).
    Diagnostic(String),
}

impl Outcome {
    /// Returns `true` if formatting produced a transcript.
    ///
    /// Hosts deciding whether the output is worth persisting should combine
    /// this with a non-empty check on the transcript text.
    #[must_use]
    pub const fn is_transcript(&self) -> bool {
        matches!(self, Self::Transcript(_))
    }
}

/// Formats a raw conversation export into a plain-text transcript.
///
/// Parses `raw` as an AI Studio export, then renders every recognized chunk
/// in order. Pure apart from log lines for skipped chunks; reading the input
/// and persisting the output are the caller's concern.
#[must_use]
pub fn format_conversation(raw: &str) -> Outcome {
    match parser::parse_conversation(raw) {
        Ok(conversation) => Outcome::Transcript(renderer::render_transcript(&conversation)),
        Err(e) => Outcome::Diagnostic(e.to_string()),
    }
}
