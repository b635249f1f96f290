//! Shared text normalization for transcript tokenizers.
//!
//! Every format tokenizer runs its extracted message bodies through the
//! helpers in this module: header stripping, blank-line collapsing,
//! trailing-separator removal, and scrubbing of ChatGPT citation artifacts.
//!
//! Patterns are compiled once via [`LazyLock`] statics; all helpers are pure
//! functions over `&str`.

use std::sync::LazyLock;

use regex::Regex;

/// Leading markdown title line, e.g. `# Improve the copywriting of this page`.
static TITLE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#.*\n").unwrap());

/// Full export header with captures: `_Exported on <date> at <time> from <tool>_`.
static EXPORT_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_Exported on (.+?) at (.+?) from (.+?)_").unwrap());

/// Export header line, for removal.
static EXPORT_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_Exported on.*?_\n?").unwrap());

/// Three or more consecutive newlines.
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Stray `---` separator left at the very end of a message body.
static TRAILING_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n?---\s*$").unwrap());

/// Runs of two or more spaces.
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"  +").unwrap());

/// ChatGPT citation artifacts: `cite⁠turn<N><suffix>` token sequences, wrapped
/// in invisible private-use-area characters (U+E200..U+E202) in exported text.
static CITATION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{E200}-\x{E202}]*cite[\x{E200}-\x{E202}]*turn\d+[\w\x{E200}-\x{E202}]*")
        .unwrap()
});

/// Export provenance parsed from an `_Exported on <date> at <time> from <tool>_`
/// header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportHeader {
    /// `"<date> <time>"`, e.g. `"7/26/2025 10:04 CEST"`.
    pub date: String,
    /// The raw matched header text with underscores removed.
    pub info: String,
}

/// Extracts export provenance from a transcript header, if present.
pub fn extract_export_header(text: &str) -> Option<ExportHeader> {
    let caps = EXPORT_HEADER.captures(text)?;
    Some(ExportHeader {
        date: format!("{} {}", &caps[1], &caps[2]),
        info: caps[0].replace('_', ""),
    })
}

/// Removes a leading `#` title line, if present.
pub fn strip_title_line(text: &str) -> String {
    TITLE_LINE.replace(text, "").into_owned()
}

/// Removes the first `_Exported on ..._` header line, if present.
pub fn strip_export_line(text: &str) -> String {
    EXPORT_LINE.replace(text, "").into_owned()
}

/// Removes the first match of a session-identifier pattern, if present.
pub(crate) fn strip_first_match(text: &str, pattern: &Regex) -> String {
    pattern.replace(text, "").into_owned()
}

/// Collapses runs of 3+ newlines to exactly two (one blank line).
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n\n").into_owned()
}

/// Strips one stray `---` separator at the very end of a message body.
///
/// Only the trailing separator is removed; `---` lines inside the body
/// (markdown rules, frontmatter fences in code blocks) are left alone.
pub fn strip_trailing_rule(text: &str) -> String {
    TRAILING_RULE.replace(text, "").into_owned()
}

/// Collapses runs of 2+ spaces to a single space.
pub fn collapse_spaces(text: &str) -> String {
    SPACE_RUN.replace_all(text, " ").into_owned()
}

/// Removes ChatGPT citation-marker artifacts, including the invisible
/// private-use-area characters that wrap them.
pub fn strip_citation_markers(text: &str) -> String {
    CITATION_MARKER.replace_all(text, "").into_owned()
}
