//! Claude.ai conversation tokenizer.
//!
//! Conversations copied from the Claude.ai web interface use inline line
//! prefixes rather than block separators: each turn begins at a line
//! starting with `Human:` or `Assistant:` (case-sensitive). There is no
//! title or export-header convention for this format.

use crate::message::{Message, Role};
use crate::normalize;
use crate::parser::{Source, Tokenizer};
use crate::parsers::split_at_line_markers;

const MARKERS: [&str; 2] = ["Human:", "Assistant:"];

/// Tokenizer for `Human:`/`Assistant:` prefixed Claude.ai conversations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeAiTokenizer;

impl ClaudeAiTokenizer {
    /// Creates a new tokenizer.
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for ClaudeAiTokenizer {
    fn name(&self) -> &'static str {
        "Claude.ai"
    }

    fn source(&self) -> Source {
        Source::ClaudeAi
    }

    fn tokenize(&self, text: &str) -> Vec<Message> {
        let mut messages = Vec::new();

        for chunk in split_at_line_markers(text, &MARKERS) {
            let part = chunk.trim();

            if let Some(rest) = part.strip_prefix("Human:") {
                let content = clean(rest);
                if content.is_empty() {
                    continue;
                }
                let mut msg = Message::new(Role::User, content);
                if messages.is_empty() {
                    msg = msg.with_source(Source::ClaudeAi);
                }
                messages.push(msg);
            } else if let Some(rest) = part.strip_prefix("Assistant:") {
                let content = clean(rest);
                if content.is_empty() {
                    continue;
                }
                messages.push(Message::new(Role::Assistant, content).with_source(Source::ClaudeAi));
            }
            // Text before the first marker carries no role; skip it.
        }

        messages
    }
}

fn clean(raw: &str) -> String {
    normalize::collapse_blank_lines(raw.trim()).trim().to_string()
}
