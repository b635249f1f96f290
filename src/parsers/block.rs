//! Shared segmentation for bold-label block transcripts.
//!
//! Claude Code, Cursor, and ChatGPT's block variant all use the same
//! delimiter shape: a `---` separator line, a blank line, and a bold role
//! label (`**User**`, `**Claude**`, ...) on its own line. Rather than
//! copying the segmentation loop per tool, each tool supplies a
//! [`BlockFormat`] describing its labels and cleanup quirks.
//!
//! A boundary is only the full three-line compound pattern. A bare `---`
//! inside a message body (a markdown horizontal rule, a frontmatter fence
//! in a code block) is never a boundary, so message bodies containing rules
//! survive intact.

use std::sync::LazyLock;

use regex::Regex;

use crate::message::{Message, Role};
use crate::normalize;
use crate::parser::Source;

/// Strips the `**User**` label line from a segment head.
static USER_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*User\*\*\n?").unwrap());

/// Byte length of the `\n---\n` separator that each boundary match begins
/// with; segment starts are offset past it.
const SEPARATOR_LEN: usize = 5;

/// Configuration of one bold-label block convention.
pub(crate) struct BlockFormat {
    /// Tag applied to produced messages.
    pub source: Source,
    /// Compound delimiter: `\n---\n\n**<Label>**`.
    pub boundary: &'static LazyLock<Regex>,
    /// Strips the assistant label line from a segment head.
    pub assistant_label: &'static LazyLock<Regex>,
    /// Literal label prefixes that mark an assistant segment.
    pub assistant_prefixes: &'static [&'static str],
    /// Session-identifier line removed during preprocessing.
    pub session_line: Option<&'static LazyLock<Regex>>,
    /// Whether the `_Exported on ..._` header is removed and captured into
    /// the first message's metadata.
    pub captures_export: bool,
    /// Whether citation artifacts and space runs are scrubbed (ChatGPT).
    pub scrubs_citations: bool,
    /// Whether user messages after the first still carry a source tag.
    pub tags_follow_up_users: bool,
}

/// Result of one block segmentation pass.
pub(crate) struct BlockParse {
    /// Number of compound delimiters found. Zero means the text carries no
    /// block structure at all, which callers with further fallback
    /// conventions (ChatGPT) use to move on.
    pub boundary_count: usize,
    pub messages: Vec<Message>,
}

/// Segments a transcript according to `fmt` and returns the messages found.
pub(crate) fn parse_blocks(text: &str, fmt: &BlockFormat) -> BlockParse {
    let mut cleaned = normalize::strip_title_line(text);
    if let Some(session_line) = fmt.session_line {
        cleaned = normalize::strip_first_match(&cleaned, session_line);
    }

    let export = if fmt.captures_export {
        let header = normalize::extract_export_header(&cleaned);
        cleaned = normalize::strip_export_line(&cleaned);
        header
    } else {
        None
    };

    // Text before the first delimiter is itself a segment; if it begins
    // with a recognized label it becomes the first message.
    let mut boundaries = vec![0usize];
    for m in fmt.boundary.find_iter(&cleaned) {
        boundaries.push(m.start() + SEPARATOR_LEN);
    }
    let boundary_count = boundaries.len() - 1;
    boundaries.push(cleaned.len());

    let mut messages = Vec::new();
    for pair in boundaries.windows(2) {
        let section = cleaned[pair[0]..pair[1]].trim();
        if section.is_empty() {
            continue;
        }

        let (role, stripped) = if section.starts_with("**User**") {
            (Role::User, USER_LABEL.replace(section, ""))
        } else if fmt.assistant_prefixes.iter().any(|p| section.starts_with(p)) {
            (Role::Assistant, fmt.assistant_label.replace(section, ""))
        } else {
            // Leading prose, a lone separator, an unrecognized label:
            // not a message.
            continue;
        };

        let content = clean_section(stripped.trim(), fmt);
        if content.is_empty() {
            continue;
        }

        let tagged = role == Role::Assistant || messages.is_empty() || fmt.tags_follow_up_users;
        let mut msg = Message::new(role, content);
        if tagged {
            msg = msg.with_source(fmt.source);
        }
        if messages.is_empty() {
            if let Some(header) = &export {
                msg = msg.with_export(Some(header.date.clone()), Some(header.info.clone()));
            }
        }
        messages.push(msg);
    }

    BlockParse {
        boundary_count,
        messages,
    }
}

/// Per-message cleanup: trailing separator, blank-line runs, and (for
/// formats that need it) citation artifacts and space runs.
fn clean_section(raw: &str, fmt: &BlockFormat) -> String {
    let mut content = if fmt.scrubs_citations {
        normalize::strip_citation_markers(raw)
    } else {
        raw.to_string()
    };

    content = normalize::strip_trailing_rule(&content);
    content = normalize::collapse_blank_lines(&content);
    if fmt.scrubs_citations {
        content = normalize::collapse_spaces(&content);
    }

    content.trim().to_string()
}
