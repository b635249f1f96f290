//! Generic line-oriented fallback tokenizer.
//!
//! Used only when no signature matches and every format-specific tokenizer
//! came up empty. Scans line by line: a `User:`/`Human:`/`You:` line opens
//! a user message, an `Assistant:`/`AI:`/`Claude:`/`ChatGPT:`/`Bot:` line
//! opens an assistant message (both case-insensitive), and every other
//! non-empty line accumulates into the currently open message. Messages
//! from this path are tagged [`Source::Unknown`].

use std::sync::LazyLock;

use regex::Regex;

use crate::message::{Message, Role};
use crate::parser::{Source, Tokenizer};

static USER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(User|Human|You):").unwrap());

static ASSISTANT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(Assistant|AI|Claude|ChatGPT|Bot):").unwrap());

/// Strips the `<role>:` marker from the opening line.
static MARKER_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^:]+:\s*").unwrap());

/// Line-oriented heuristic tokenizer for unrecognized transcripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericTokenizer;

impl GenericTokenizer {
    /// Creates a new tokenizer.
    pub fn new() -> Self {
        Self
    }
}

struct OpenMessage {
    role: Role,
    tagged: bool,
}

impl Tokenizer for GenericTokenizer {
    fn name(&self) -> &'static str {
        "Generic"
    }

    fn source(&self) -> Source {
        Source::Unknown
    }

    fn tokenize(&self, text: &str) -> Vec<Message> {
        let mut messages: Vec<Message> = Vec::new();
        let mut current: Option<OpenMessage> = None;
        let mut buffer: Vec<&str> = Vec::new();

        for line in text.lines() {
            let trimmed = line.trim();

            if USER_MARKER.is_match(trimmed) {
                flush(&mut messages, current.take(), &mut buffer);
                current = Some(OpenMessage {
                    role: Role::User,
                    tagged: messages.is_empty(),
                });
                buffer.push(after_marker(trimmed));
            } else if ASSISTANT_MARKER.is_match(trimmed) {
                flush(&mut messages, current.take(), &mut buffer);
                current = Some(OpenMessage {
                    role: Role::Assistant,
                    tagged: true,
                });
                buffer.push(after_marker(trimmed));
            } else if !trimmed.is_empty() && current.is_some() {
                buffer.push(trimmed);
            }
        }

        flush(&mut messages, current.take(), &mut buffer);
        messages
    }
}

fn after_marker(line: &str) -> &str {
    match MARKER_PREFIX.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

fn flush(messages: &mut Vec<Message>, current: Option<OpenMessage>, buffer: &mut Vec<&str>) {
    let Some(open) = current else {
        buffer.clear();
        return;
    };

    let content = buffer.join("\n").trim().to_string();
    buffer.clear();
    if content.is_empty() {
        return;
    }

    let mut msg = Message::new(open.role, content);
    if open.tagged {
        msg = msg.with_source(Source::Unknown);
    }
    messages.push(msg);
}
