// SPDX-License-Identifier: GPL-3.0-only

//! JSON parsing for Google AI Studio conversation exports.
//!
//! This module handles deserialization of the JSON format AI Studio uses to
//! save a conversation. The interesting part of the document is the
//! `chunkedPrompt.chunks` array, which holds the conversation turns in order.
//!
//! # Format Overview
//!
//! An AI Studio export looks like:
//!
//! ```json
//! {
//!     "chunkedPrompt": {
//!         "chunks": [
//!             { "role": "user", "text": "Hi" },
//!             { "role": "model", "text": "Thinking...", "isThought": true },
//!             { "role": "model", "text": "Hello!" }
//!         ]
//!     }
//! }
//! ```
//!
//! The format is permissive: either nesting level may be missing entirely
//! (yielding an empty conversation), and individual chunks may omit fields.
//! Defaulting rules are part of deserialization: a missing `text` becomes the
//! empty string while an explicit `null` stays absent, and a missing
//! `isThought` is `false`.
//!
//! # Example
//!
//! ```
//! use ais2txt::parser::parse_conversation;
//!
//! let json = r#"{
//!     "chunkedPrompt": {
//!         "chunks": [{ "role": "user", "text": "Hello" }]
//!     }
//! }"#;
//!
//! let conversation = parse_conversation(json).unwrap();
//! assert_eq!(conversation.chunks.len(), 1);
//! ```

use serde::Deserialize;
use snafu::prelude::*;

/// Error type for parsing failures.
///
/// Both variants render as a one-line message suitable for reporting in
/// place of a transcript.
#[derive(Debug, Snafu)]
pub enum ParseError {
    /// The input is not valid JSON at all.
    #[snafu(display("failed to decode JSON: {source}"))]
    Malformed {
        /// The underlying JSON parsing error.
        source: serde_json::Error,
    },

    /// The JSON parsed but a field along the `chunkedPrompt.chunks` path has
    /// the wrong kind.
    #[snafu(display("unexpected shape: {field} is {found}, expected {expected}"))]
    Shape {
        /// The field that had the wrong kind (`$` for the document root).
        field: &'static str,
        /// The kind the field was expected to be.
        expected: &'static str,
        /// The kind actually found.
        found: &'static str,
    },
}

/// A parsed conversation export.
///
/// Holds the chunk sequence in original order. Exports without a
/// `chunkedPrompt` or without `chunks` parse to an empty conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Conversation {
    /// The conversation turns, in the order they appear in the export.
    pub chunks: Vec<Chunk>,
}

/// The speaker of a chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// A turn authored by the person using AI Studio.
    User,
    /// A turn authored by the model.
    Model,
    /// An unrecognized role value, preserved for diagnostics.
    Other(String),
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "user" => Self::User,
            "model" => Self::Model,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// One conversation turn.
///
/// Field absence is modeled explicitly rather than papered over: the renderer
/// decides what to do with a chunk missing a role or carrying a null text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The speaker, or `None` when the export omitted the role (or left it
    /// empty).
    pub role: Option<Role>,

    /// The turn text. `Some("")` when the field was missing entirely;
    /// `None` when the export carried an explicit `null` (or a non-string
    /// value).
    pub text: Option<String>,

    /// Whether this is internal model reasoning rather than final output.
    /// Defaults to `false`; only meaningful for model turns.
    pub is_thought: bool,
}

impl<'de> Deserialize<'de> for Chunk {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;

        let role = get_str(&value, &["role"])
            .filter(|r| !r.is_empty())
            .map(Role::from);

        // Missing text defaults to empty; explicit null stays absent so the
        // renderer skips the chunk.
        let text = match value.get("text") {
            None => Some(String::new()),
            Some(v) => v.as_str().map(str::to_owned),
        };

        let is_thought = value
            .get("isThought")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false);

        Ok(Self {
            role,
            text,
            is_thought,
        })
    }
}

/// Navigates a JSON path and returns the string value at the end.
fn get_str<'a>(value: &'a serde_json::Value, path: &[&str]) -> Option<&'a str> {
    let mut current = value;
    for key in path {
        current = current.get(*key)?;
    }
    current.as_str()
}

/// Names the JSON kind of a value for shape diagnostics.
const fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Parses a JSON string into a [`Conversation`].
///
/// This is the main entry point for parsing AI Studio exports. Missing
/// `chunkedPrompt` or `chunks` fields yield an empty conversation; fields
/// present with the wrong kind are a [`ParseError::Shape`] instead.
///
/// # Errors
///
/// Returns [`ParseError::Malformed`] when the input is not valid JSON, and
/// [`ParseError::Shape`] when the document root, `chunkedPrompt`, or
/// `chunkedPrompt.chunks` has the wrong kind.
///
/// # Example
///
/// ```
/// use ais2txt::parser::parse_conversation;
///
/// let conversation = parse_conversation("{}").unwrap();
/// assert!(conversation.chunks.is_empty());
/// ```
pub fn parse_conversation(json_str: &str) -> Result<Conversation, ParseError> {
    let value: serde_json::Value = serde_json::from_str(json_str).context(MalformedSnafu)?;

    let root = value.as_object().context(ShapeSnafu {
        field: "$",
        expected: "an object",
        found: kind_of(&value),
    })?;

    let Some(prompt) = root.get("chunkedPrompt") else {
        return Ok(Conversation::default());
    };
    let prompt = prompt.as_object().context(ShapeSnafu {
        field: "chunkedPrompt",
        expected: "an object",
        found: kind_of(prompt),
    })?;

    let Some(chunks) = prompt.get("chunks") else {
        return Ok(Conversation::default());
    };
    let chunks = chunks.as_array().context(ShapeSnafu {
        field: "chunkedPrompt.chunks",
        expected: "an array",
        found: kind_of(chunks),
    })?;

    // Chunk deserialization is infallible over any JSON value; a non-object
    // element degrades to a chunk with no role, skipped downstream.
    let chunks = chunks
        .iter()
        .filter_map(|c| serde_json::from_value(c.clone()).ok())
        .collect();

    Ok(Conversation { chunks })
}
