//! JSON output helpers for parsed messages.
//!
//! Messages are plain data; these helpers serialize a parsed transcript for
//! storage or for handing to a rendering pipeline. Available behind the
//! `json-output` feature (enabled by default).

use std::fs;
use std::path::Path;

use crate::Message;
use crate::error::Result;

/// Serializes messages to pretty-printed JSON.
pub fn to_json(messages: &[Message]) -> Result<String> {
    Ok(serde_json::to_string_pretty(messages)?)
}

/// Serializes messages to JSON Lines, one message per line.
pub fn to_jsonl(messages: &[Message]) -> Result<String> {
    let mut out = String::new();
    for msg in messages {
        out.push_str(&serde_json::to_string(msg)?);
        out.push('\n');
    }
    Ok(out)
}

/// Writes messages to a file as pretty-printed JSON.
pub fn write_json(messages: &[Message], path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, to_json(messages)?)?;
    Ok(())
}

/// Writes messages to a file as JSON Lines.
pub fn write_jsonl(messages: &[Message], path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, to_jsonl(messages)?)?;
    Ok(())
}
