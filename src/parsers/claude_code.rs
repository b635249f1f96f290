//! Claude Code session export tokenizer.
//!
//! Claude Code's `/export` command produces markdown with a title line,
//! a `_Claude Code session..._` identifier, an `_Exported on ..._` header,
//! and turns delimited by `---` separator blocks with `**User**` /
//! `**Claude**` labels:
//!
//! ```text
//! # Fix the flaky integration test
//! _Exported on 1/1/2025 at 9:00 from Claude Code_
//!
//! ---
//!
//! **User**
//! the watcher test fails on CI
//!
//! ---
//!
//! **Claude**
//! Looking at the test now...
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::Message;
use crate::parser::{Source, Tokenizer};
use crate::parsers::block::{BlockFormat, parse_blocks};

static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n---\n\n\*\*(User|Claude|Assistant)\*\*").unwrap());

static ASSISTANT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*(Claude|Assistant)\*\*\n?").unwrap());

static SESSION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_Claude Code session.*?_\n?").unwrap());

static FORMAT: BlockFormat = BlockFormat {
    source: Source::ClaudeCode,
    boundary: &BOUNDARY,
    assistant_label: &ASSISTANT_LABEL,
    assistant_prefixes: &["**Claude**", "**Assistant**"],
    session_line: Some(&SESSION_LINE),
    captures_export: true,
    scrubs_citations: false,
    tags_follow_up_users: true,
};

/// Tokenizer for Claude Code markdown session exports.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeCodeTokenizer;

impl ClaudeCodeTokenizer {
    /// Creates a new tokenizer.
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for ClaudeCodeTokenizer {
    fn name(&self) -> &'static str {
        "Claude Code"
    }

    fn source(&self) -> Source {
        Source::ClaudeCode
    }

    fn tokenize(&self, text: &str) -> Vec<Message> {
        parse_blocks(text, &FORMAT).messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    const EXPORT: &str = "# Title\n\
        _Claude Code session from 1/1/2025_\n\
        \n\
        ---\n\
        \n\
        **User**\n\
        hello\n\
        \n\
        ---\n\
        \n\
        **Assistant**\n\
        hi there\n";

    #[test]
    fn test_basic_session() {
        let messages = ClaudeCodeTokenizer::new().tokenize(EXPORT);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role(), Role::User);
        assert_eq!(messages[0].content(), "hello");
        assert_eq!(messages[0].source(), Some(Source::ClaudeCode));
        assert_eq!(messages[1].role(), Role::Assistant);
        assert_eq!(messages[1].content(), "hi there");
        assert_eq!(messages[1].source(), Some(Source::ClaudeCode));
    }

    #[test]
    fn test_claude_label_maps_to_assistant() {
        let text = "\n---\n\n**User**\nquestion\n\n---\n\n**Claude**\nanswer\n";
        let messages = ClaudeCodeTokenizer::new().tokenize(text);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role(), Role::Assistant);
        assert_eq!(messages[1].content(), "answer");
    }

    #[test]
    fn test_export_header_on_first_message_only() {
        let text = "# Session\n\
            _Exported on 1/1/2025 at 9:00 from Claude Code_\n\
            \n\
            ---\n\
            \n\
            **User**\nfirst\n\
            \n\
            ---\n\
            \n\
            **Claude**\nsecond\n";
        let messages = ClaudeCodeTokenizer::new().tokenize(text);
        assert_eq!(messages.len(), 2);

        let first = messages[0].metadata().unwrap();
        assert_eq!(first.export_date.as_deref(), Some("1/1/2025 9:00"));
        assert_eq!(
            first.export_info.as_deref(),
            Some("Exported on 1/1/2025 at 9:00 from Claude Code")
        );

        let second = messages[1].metadata().unwrap();
        assert!(second.export_date.is_none());
        assert!(second.export_info.is_none());
    }

    #[test]
    fn test_rule_inside_body_is_not_a_boundary() {
        // A bare --- (markdown horizontal rule) inside the assistant's reply
        // must not fragment the message: only the compound pattern
        // separator + blank + bold label delimits.
        let text = "\n---\n\n**User**\nexplain frontmatter\n\n---\n\n**Claude**\n\
            Frontmatter is fenced like this:\n\
            \n\
            ---\n\
            title: Post\n\
            ---\n\
            \n\
            and then the body follows.\n";
        let messages = ClaudeCodeTokenizer::new().tokenize(text);
        assert_eq!(messages.len(), 2);
        assert!(messages[1].content().contains("title: Post"));
        assert!(messages[1].content().contains("and then the body follows."));
    }

    #[test]
    fn test_trailing_separator_stripped() {
        let text = "\n---\n\n**User**\nhello\n\n---";
        let messages = ClaudeCodeTokenizer::new().tokenize(text);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content(), "hello");
    }

    #[test]
    fn test_blank_line_runs_collapse() {
        let text = "\n---\n\n**User**\nline one\n\n\n\n\nline two\n";
        let messages = ClaudeCodeTokenizer::new().tokenize(text);
        assert_eq!(messages[0].content(), "line one\n\nline two");
    }

    #[test]
    fn test_empty_sections_dropped() {
        let text = "\n---\n\n**User**\n\n\n---\n\n**Claude**\nreal content\n";
        let messages = ClaudeCodeTokenizer::new().tokenize(text);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role(), Role::Assistant);
    }

    #[test]
    fn test_unstructured_text_yields_nothing() {
        assert!(ClaudeCodeTokenizer::new().tokenize("plain prose, no labels").is_empty());
    }
}
