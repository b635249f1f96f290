//! Cursor chat export tokenizer.
//!
//! Cursor's "Export Chat" produces markdown structurally identical to
//! Claude Code sessions — title line, `_Exported on ..._` header, and
//! `---`-delimited blocks — except the assistant label reads `**Cursor**`.
//! There is no session-identifier line.

use std::sync::LazyLock;

use regex::Regex;

use crate::Message;
use crate::parser::{Source, Tokenizer};
use crate::parsers::block::{BlockFormat, parse_blocks};

static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n---\n\n\*\*(User|Cursor|Assistant)\*\*").unwrap());

static ASSISTANT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*(Cursor|Assistant)\*\*\n?").unwrap());

static FORMAT: BlockFormat = BlockFormat {
    source: Source::Cursor,
    boundary: &BOUNDARY,
    assistant_label: &ASSISTANT_LABEL,
    assistant_prefixes: &["**Cursor**", "**Assistant**"],
    session_line: None,
    captures_export: true,
    scrubs_citations: false,
    tags_follow_up_users: true,
};

/// Tokenizer for Cursor markdown chat exports.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorTokenizer;

impl CursorTokenizer {
    /// Creates a new tokenizer.
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for CursorTokenizer {
    fn name(&self) -> &'static str {
        "Cursor"
    }

    fn source(&self) -> Source {
        Source::Cursor
    }

    fn tokenize(&self, text: &str) -> Vec<Message> {
        parse_blocks(text, &FORMAT).messages
    }
}
