//! # Transcriptor
//!
//! A Rust library for parsing AI-assistant chat transcript exports into a
//! normalized sequence of role-tagged messages.
//!
//! ## Overview
//!
//! AI coding tools and chat interfaces each export conversations with their
//! own ad-hoc textual conventions:
//!
//! - **Claude Code** — markdown sessions with `---` separators and bold
//!   `**User**`/`**Claude**` labels
//! - **Cursor** — the same block shape with `**Cursor**` as the assistant
//!   label
//! - **Claude.ai** — inline `Human:`/`Assistant:` line prefixes
//! - **ChatGPT** — bold-label blocks, plain `User:`/`ChatGPT:` prefixes, or
//!   numbered lists, plus invisible citation artifacts
//!
//! Transcriptor detects the format by signature, tokenizes accordingly, and
//! normalizes every message body. It never fails: malformed input degrades
//! through a fallback chain down to a generic line-oriented parse, and
//! ultimately to an empty list.
//!
//! ## Quick Start
//!
//! ```rust
//! use transcriptor::{parse_transcript, Role, Source};
//!
//! let text = "# Title\n_Claude Code session from 1/1/2025_\n\n---\n\n\
//!             **User**\nhello\n\n---\n\n**Assistant**\nhi there";
//!
//! let messages = parse_transcript(text);
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].role(), Role::User);
//! assert_eq!(messages[0].content(), "hello");
//! assert_eq!(messages[0].source(), Some(Source::ClaudeCode));
//! ```
//!
//! ## Guarantees
//!
//! - Output order matches conversation order in the source text.
//! - Messages with empty content after cleaning are dropped, never emitted.
//! - Export provenance (`exportDate`/`exportInfo`) is attached to the first
//!   message only.
//! - [`parse_transcript`] never panics and never errors; the worst outcome
//!   is an empty vector.
//! - The parser is a pure function with no shared state: safe to call
//!   concurrently without coordination.
//!
//! ## Module Structure
//!
//! - [`parser`] — format detection and the top-level entry points
//!   - [`parse_transcript`], [`parse_transcript_opt`], [`parse_transcript_file`]
//!   - [`Source`] — detected export tool
//!   - [`Tokenizer`](parser::Tokenizer), [`create_tokenizer`](parser::create_tokenizer)
//! - [`message`] — [`Message`], [`Role`], [`Metadata`]
//! - [`parsers`] — the five tokenizer implementations
//! - [`normalize`] — shared content cleanup helpers
//! - [`output`] — JSON/JSONL serialization (feature `json-output`)
//! - [`error`] — [`TranscriptError`], [`Result`] (I/O edges only)
//! - [`prelude`] — convenient re-exports

pub mod error;
pub mod message;
pub mod normalize;
#[cfg(feature = "json-output")]
pub mod output;
pub mod parser;
pub mod parsers;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export the main types at the crate root for convenience
pub use error::{Result, TranscriptError};
pub use message::{Message, Metadata, Role};
pub use parser::{Source, parse_transcript, parse_transcript_file, parse_transcript_opt};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use transcriptor::prelude::*;
/// ```
pub mod prelude {
    // Core message types
    pub use crate::message::{Message, Metadata, Role};

    // Error types
    pub use crate::error::{Result, TranscriptError};

    // Detection and parsing
    pub use crate::parser::{
        FALLBACK_ORDER, Source, Tokenizer, create_tokenizer, parse_transcript,
        parse_transcript_file, parse_transcript_opt,
    };

    // Tokenizers
    pub use crate::parsers::{
        ChatGptTokenizer, ClaudeAiTokenizer, ClaudeCodeTokenizer, CursorTokenizer,
        GenericTokenizer,
    };

    // Output (string converters and file writers)
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};
}
