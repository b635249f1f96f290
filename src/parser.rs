//! Format detection and top-level transcript parsing.
//!
//! This module provides the single entry point consumed by renderers,
//! [`parse_transcript`], along with the [`Source`] tag it detects and the
//! [`Tokenizer`] trait each format implementation satisfies.
//!
//! # Example
//!
//! ```rust
//! use transcriptor::{parse_transcript, Role};
//!
//! let messages = parse_transcript("Human: ping\nAssistant: pong");
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].role(), Role::User);
//! ```
//!
//! # Source Selection
//!
//! Use [`Source`] to bypass detection and pick a tokenizer directly:
//!
//! ```rust
//! use transcriptor::parser::{Source, create_tokenizer};
//!
//! let tokenizer = create_tokenizer(Source::ChatGpt);
//! let messages = tokenizer.tokenize("User: hi\nChatGPT: hello");
//! assert_eq!(messages.len(), 2);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::Result;
use crate::parsers::{
    ChatGptTokenizer, ClaudeAiTokenizer, ClaudeCodeTokenizer, CursorTokenizer, GenericTokenizer,
};

/// Export tools whose transcript conventions this crate understands.
///
/// # Example
///
/// ```rust
/// use transcriptor::Source;
/// use std::str::FromStr;
///
/// let source = Source::from_str("claude-code").unwrap();
/// assert_eq!(source, Source::ClaudeCode);
///
/// // Aliases are supported
/// let source = Source::from_str("gpt").unwrap();
/// assert_eq!(source, Source::ChatGpt);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum Source {
    /// Markdown session exports from the Claude Code CLI
    ClaudeCode,

    /// Markdown chat exports from the Cursor editor
    Cursor,

    /// Conversations copied from the Claude.ai web interface
    ClaudeAi,

    /// Conversations copied or exported from ChatGPT
    #[serde(rename = "chatgpt")]
    ChatGpt,

    /// No recognized signature; handled by the generic fallback
    Unknown,
}

impl Source {
    /// Classifies a transcript by its signature substrings.
    ///
    /// Checks are ordered, first match wins: the signatures are not mutually
    /// exclusive (a Claude Code export can quote a ChatGPT conversation), so
    /// the authoritative session markers of the exporting tool are checked
    /// before looser content-based signals.
    pub fn detect(text: &str) -> Source {
        if text.contains("from Claude Code") || text.contains("Claude Code session") {
            Source::ClaudeCode
        } else if text.contains("from Cursor") {
            Source::Cursor
        } else if text.contains("Human:") && text.contains("Assistant:") {
            Source::ClaudeAi
        } else if text.contains("ChatGPT") {
            Source::ChatGpt
        } else {
            Source::Unknown
        }
    }

    /// Returns all source names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &[
            "claude-code",
            "cc",
            "cursor",
            "claude-ai",
            "claude",
            "chatgpt",
            "gpt",
            "unknown",
            "generic",
        ]
    }

    /// Returns the known sources, in fallback priority order.
    pub fn all() -> &'static [Source] {
        &FALLBACK_ORDER
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::ClaudeCode => write!(f, "Claude Code"),
            Source::Cursor => write!(f, "Cursor"),
            Source::ClaudeAi => write!(f, "Claude.ai"),
            Source::ChatGpt => write!(f, "ChatGPT"),
            Source::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "claude-code" | "claudecode" | "cc" => Ok(Source::ClaudeCode),
            "cursor" => Ok(Source::Cursor),
            "claude-ai" | "claudeai" | "claude" => Ok(Source::ClaudeAi),
            "chatgpt" | "gpt" => Ok(Source::ChatGpt),
            "unknown" | "generic" => Ok(Source::Unknown),
            _ => Err(format!(
                "Unknown source: '{}'. Expected one of: {}",
                s,
                Source::all_names().join(", ")
            )),
        }
    }
}

/// The order in which tokenizers are tried when no signature matches.
pub const FALLBACK_ORDER: [Source; 4] = [
    Source::ClaudeCode,
    Source::Cursor,
    Source::ClaudeAi,
    Source::ChatGpt,
];

/// A format-specific tokenizer that splits a transcript into ordered,
/// role-tagged messages.
///
/// Tokenizers are tolerant of missing or malformed structure: they return
/// as many valid messages as they can find, and an empty list — never an
/// error — when the format doesn't match at all.
pub trait Tokenizer: Send + Sync {
    /// Returns the human-readable name of this tokenizer.
    fn name(&self) -> &'static str;

    /// Returns the source this tokenizer handles.
    fn source(&self) -> Source;

    /// Splits a raw transcript into ordered messages.
    ///
    /// Returns an empty vector for input this tokenizer cannot segment;
    /// it never panics and never errors.
    fn tokenize(&self, text: &str) -> Vec<Message>;
}

/// Creates a tokenizer for the specified source.
///
/// [`Source::Unknown`] maps to the generic line-oriented fallback.
///
/// # Example
///
/// ```rust
/// use transcriptor::parser::{Source, create_tokenizer};
///
/// let tokenizer = create_tokenizer(Source::Cursor);
/// assert_eq!(tokenizer.name(), "Cursor");
/// ```
pub fn create_tokenizer(source: Source) -> Box<dyn Tokenizer> {
    match source {
        Source::ClaudeCode => Box::new(ClaudeCodeTokenizer::new()),
        Source::Cursor => Box::new(CursorTokenizer::new()),
        Source::ClaudeAi => Box::new(ClaudeAiTokenizer::new()),
        Source::ChatGpt => Box::new(ChatGptTokenizer::new()),
        Source::Unknown => Box::new(GenericTokenizer::new()),
    }
}

/// Parses any supported transcript format into ordered messages.
///
/// Control flow:
/// 1. Detect the source by signature.
/// 2. A confident detection dispatches to exactly that tokenizer, and its
///    result is returned even when empty. A recognized export that fails to
///    segment yields `[]` rather than being reinterpreted by looser
///    tokenizers; this trades recall for precision.
/// 3. When no signature matches, each tokenizer is tried in
///    [`FALLBACK_ORDER`] and the first non-empty result wins.
/// 4. If all four come up empty, the generic line-oriented fallback runs.
///
/// This function never panics and never errors; unusable input produces an
/// empty vector.
///
/// # Example
///
/// ```rust
/// use transcriptor::parse_transcript;
///
/// assert!(parse_transcript("").is_empty());
///
/// let messages = parse_transcript("You: hi\nBot: hello back");
/// assert_eq!(messages.len(), 2);
/// ```
pub fn parse_transcript(text: &str) -> Vec<Message> {
    if text.is_empty() {
        return Vec::new();
    }

    match Source::detect(text) {
        Source::Unknown => {
            for source in FALLBACK_ORDER {
                let messages = create_tokenizer(source).tokenize(text);
                if !messages.is_empty() {
                    return messages;
                }
            }
            GenericTokenizer::new().tokenize(text)
        }
        source => create_tokenizer(source).tokenize(text),
    }
}

/// Parses an optional transcript; `None` yields an empty list.
///
/// Callers holding text of uncertain provenance (a missing frontmatter
/// field, an absent query parameter) can pass it through without unwrapping.
pub fn parse_transcript_opt(text: Option<&str>) -> Vec<Message> {
    text.map(parse_transcript).unwrap_or_default()
}

/// Reads a transcript file and parses it.
///
/// The only failure mode is I/O; the parse itself cannot fail.
pub fn parse_transcript_file(path: impl AsRef<Path>) -> Result<Vec<Message>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_transcript(&content))
}
