//! ChatGPT conversation tokenizer.
//!
//! ChatGPT exports arrive in three structurally different conventions,
//! tried in order:
//!
//! 1. **Bold-label blocks** — the same `---` + `**User**`/`**Assistant**`
//!    shape as Claude Code/Cursor. Used exclusively when at least one
//!    boundary is found.
//! 2. **Plain prefixes** — lines beginning with `User:`, `ChatGPT:`, or
//!    `Assistant:`.
//! 3. **Numbered list** — turns introduced by `<n>. User: ...` items; only
//!    reached when both prior conventions yield nothing.
//!
//! Exported ChatGPT text embeds citation artifacts (`cite⁠turn<N>...`
//! wrapped in invisible private-use-area characters); these are scrubbed
//! from every message body, and space runs collapse to one space.

use std::sync::LazyLock;

use regex::Regex;

use crate::message::{Message, Role};
use crate::normalize;
use crate::parser::{Source, Tokenizer};
use crate::parsers::block::{BlockFormat, parse_blocks};
use crate::parsers::split_at_line_markers;

static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n---\n\n\*\*(User|Assistant)\*\*").unwrap());

static ASSISTANT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*Assistant\*\*\n?").unwrap());

static SESSION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_ChatGPT session.*?_\n?").unwrap());

/// Strips a `ChatGPT:` or `Assistant:` prefix from a chunk head.
static ASSISTANT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(ChatGPT|Assistant):\s*").unwrap());

/// Numbered-list item openers, e.g. `\n3. `.
static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\d+\.\s+").unwrap());

static FORMAT: BlockFormat = BlockFormat {
    source: Source::ChatGpt,
    boundary: &BOUNDARY,
    assistant_label: &ASSISTANT_LABEL,
    assistant_prefixes: &["**Assistant**"],
    session_line: Some(&SESSION_LINE),
    captures_export: false,
    scrubs_citations: true,
    tags_follow_up_users: false,
};

const PREFIX_MARKERS: [&str; 3] = ["User:", "ChatGPT:", "Assistant:"];

/// Tokenizer for ChatGPT conversations in any of the three conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatGptTokenizer;

impl ChatGptTokenizer {
    /// Creates a new tokenizer.
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for ChatGptTokenizer {
    fn name(&self) -> &'static str {
        "ChatGPT"
    }

    fn source(&self) -> Source {
        Source::ChatGpt
    }

    fn tokenize(&self, text: &str) -> Vec<Message> {
        // Convention 1: bold-label blocks. A single boundary is enough to
        // commit to this convention, even if it segments poorly.
        let blocks = parse_blocks(text, &FORMAT);
        if blocks.boundary_count > 0 {
            return blocks.messages;
        }

        // Convention 2: plain User:/ChatGPT:/Assistant: line prefixes.
        let messages = parse_prefixed(text);
        if !messages.is_empty() {
            return messages;
        }

        // Convention 3: numbered-list items.
        parse_numbered(text)
    }
}

fn parse_prefixed(text: &str) -> Vec<Message> {
    let mut messages = Vec::new();

    for chunk in split_at_line_markers(text, &PREFIX_MARKERS) {
        let part = chunk.trim();

        if let Some(rest) = part.strip_prefix("User:") {
            let content = clean(rest);
            if content.is_empty() {
                continue;
            }
            let mut msg = Message::new(Role::User, content);
            if messages.is_empty() {
                msg = msg.with_source(Source::ChatGpt);
            }
            messages.push(msg);
        } else if part.starts_with("ChatGPT:") || part.starts_with("Assistant:") {
            let content = clean(&ASSISTANT_PREFIX.replace(part, ""));
            if content.is_empty() {
                continue;
            }
            messages.push(Message::new(Role::Assistant, content).with_source(Source::ChatGpt));
        }
    }

    messages
}

fn parse_numbered(text: &str) -> Vec<Message> {
    let mut messages = Vec::new();

    for part in NUMBERED_ITEM.split(text) {
        let part = part.trim();

        if let Some(rest) = part.strip_prefix("User:") {
            let content = rest.trim().to_string();
            if content.is_empty() {
                continue;
            }
            let mut msg = Message::new(Role::User, content);
            if messages.is_empty() {
                msg = msg.with_source(Source::ChatGpt);
            }
            messages.push(msg);
        } else if part.contains("ChatGPT:") || part.contains("Assistant:") {
            let content = ASSISTANT_PREFIX.replace(part, "").trim().to_string();
            if content.is_empty() {
                continue;
            }
            messages.push(Message::new(Role::Assistant, content).with_source(Source::ChatGpt));
        }
    }

    messages
}

/// Prefix-format cleanup: citations, blank-line runs, space runs.
fn clean(raw: &str) -> String {
    let content = normalize::strip_citation_markers(raw.trim());
    let content = normalize::collapse_blank_lines(&content);
    normalize::collapse_spaces(&content).trim().to_string()
}
