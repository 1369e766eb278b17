// SPDX-License-Identifier: GPL-3.0-only

//! Plain-text rendering for parsed conversation exports.
//!
//! This module transforms a [`Conversation`] into a flat transcript where
//! every turn is wrapped in marker lines identifying the speaker. The text
//! of each turn is carried verbatim: no escaping, no truncation.
//!
//! # Output Format
//!
//! Each chunk renders to one block chosen by `(role, isThought)`:
//!
//! ```text
//! ###user output starts###
//! <text>
//! above is from - user
//! ###user output end###
//! ```
//!
//! Model turns use `###model output starts###`/`###model output end###`, or
//! the `###model thoughts starts###`/`###model thoughts end###` pair (with an
//! `above is the thoughts of the model` line) when the chunk is flagged as
//! internal reasoning. Blocks are joined with a single blank line.
//!
//! Chunks with no role, a null text, or an unrecognized role are skipped:
//! they produce no block, a warning is logged, and the pass continues.
//!
//! # Example
//!
//! ```
//! use ais2txt::parser::{Chunk, Conversation, Role};
//! use ais2txt::renderer::render_transcript;
//!
//! let conversation = Conversation {
//!     chunks: vec![Chunk {
//!         role: Some(Role::User),
//!         text: Some("Hello!".into()),
//!         is_thought: false,
//!     }],
//! };
//!
//! let transcript = render_transcript(&conversation);
//! assert!(transcript.contains("Hello!"));
//! assert!(transcript.ends_with("###user output end###"));
//! ```

use crate::parser::{Chunk, Conversation, Role};
use tracing::warn;

/// Renders a parsed conversation as a plain-text transcript.
///
/// A single in-order pass over the chunks: each chunk contributes at most one
/// block, blocks are joined with a blank line, and a conversation with no
/// renderable chunks yields the empty string. Skipped chunks are logged with
/// their position and never abort the pass.
#[must_use]
pub fn render_transcript(conversation: &Conversation) -> String {
    let blocks: Vec<String> = conversation
        .chunks
        .iter()
        .enumerate()
        .filter_map(|(index, chunk)| render_chunk(index, chunk))
        .collect();

    blocks.join("\n\n")
}

/// Renders one chunk, or `None` when the chunk is skipped.
fn render_chunk(index: usize, chunk: &Chunk) -> Option<String> {
    let Some(text) = chunk.text.as_deref() else {
        warn!(index, "skipping chunk with null text");
        return None;
    };

    match &chunk.role {
        Some(Role::User) => Some(format!(
            "###user output starts###\n{text}\nabove is from - user\n###user output end###"
        )),
        Some(Role::Model) if chunk.is_thought => Some(format!(
            "###model thoughts starts###\n{text}\nabove is the thoughts of the model\n###model thoughts end###"
        )),
        Some(Role::Model) => Some(format!(
            "###model output starts###\n{text}\n###model output end###"
        )),
        Some(Role::Other(role)) => {
            warn!(index, role = %role, "skipping chunk with unrecognized role");
            None
        }
        None => {
            warn!(index, "skipping chunk without a role");
            None
        }
    }
}
