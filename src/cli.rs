//! Command-line interface definition using clap.
//!
//! The binary reads one transcript file, parses it, and writes the
//! normalized messages as JSON or JSON Lines.

use clap::{Parser, ValueEnum};

use crate::parser::Source;

/// Parse AI-assistant chat transcript exports (Claude Code, Cursor,
/// Claude.ai, ChatGPT) into normalized role-tagged messages.
#[derive(Parser, Debug, Clone)]
#[command(name = "transcriptor")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    transcriptor session.md
    transcriptor chat.txt -o messages.json
    transcriptor export.md --format jsonl
    transcriptor pasted.txt --source chatgpt")]
pub struct Args {
    /// Path to the transcript file
    pub input: String,

    /// Path to output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Skip detection and force a specific tokenizer
    /// (claude-code, cursor, claude-ai, chatgpt, generic)
    #[arg(short, long, value_name = "SOURCE")]
    pub source: Option<Source>,

    /// Suppress the summary printed to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    Json,
    /// One JSON object per line
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }
}
