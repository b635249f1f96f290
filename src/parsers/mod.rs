//! Format-specific transcript tokenizers.
//!
//! Each tokenizer implements the [`Tokenizer`](crate::parser::Tokenizer)
//! trait and handles the textual conventions of one export tool.
//!
//! # Available Tokenizers
//!
//! - [`ClaudeCodeTokenizer`] - Claude Code CLI markdown session exports
//! - [`CursorTokenizer`] - Cursor editor markdown chat exports
//! - [`ClaudeAiTokenizer`] - `Human:`/`Assistant:` prefixed Claude.ai text
//! - [`ChatGptTokenizer`] - ChatGPT exports (three conventions)
//! - [`GenericTokenizer`] - line-oriented fallback for unrecognized text
//!
//! The bold-label block formats (Claude Code, Cursor, and ChatGPT's block
//! variant) share one parameterized segmentation loop in [`mod@block`]; the
//! per-tool modules only supply a [`block::BlockFormat`] configuration.

pub(crate) mod block;
mod chatgpt;
mod claude_ai;
mod claude_code;
mod cursor;
mod generic;

pub use chatgpt::ChatGptTokenizer;
pub use claude_ai::ClaudeAiTokenizer;
pub use claude_code::ClaudeCodeTokenizer;
pub use cursor::CursorTokenizer;
pub use generic::GenericTokenizer;

/// Splits text into chunks that begin at lines starting with one of the
/// given role markers.
///
/// The newline before each marker line is consumed; text before the first
/// marker forms the first chunk (callers skip it when it carries no marker).
pub(crate) fn split_at_line_markers<'a>(text: &'a str, markers: &[&str]) -> Vec<&'a str> {
    let mut chunks = Vec::new();
    let mut start = 0;

    for (i, _) in text.match_indices('\n') {
        let rest = &text[i + 1..];
        if markers.iter().any(|marker| rest.starts_with(marker)) {
            chunks.push(&text[start..i]);
            start = i + 1;
        }
    }
    chunks.push(&text[start..]);

    chunks
}
