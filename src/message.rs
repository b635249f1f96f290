//! Normalized message type for all transcript formats.
//!
//! This module provides [`Message`], the normalized representation of one
//! conversational turn. Every format tokenizer converts its native textual
//! conventions into this structure, enabling uniform rendering regardless
//! of which tool produced the export.
//!
//! # Overview
//!
//! A message consists of:
//! - **Required**: `role` and `content`
//! - **Optional**: `timestamp` (reserved) and `metadata` (provenance)
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use transcriptor::{Message, Role};
//!
//! let msg = Message::new(Role::User, "Hello, world!");
//! assert_eq!(msg.role(), Role::User);
//! assert_eq!(msg.content(), "Hello, world!");
//! ```
//!
//! ## Builder Pattern
//!
//! ```
//! use transcriptor::{Message, Role, Source};
//!
//! let msg = Message::new(Role::Assistant, "Hi there!")
//!     .with_source(Source::ClaudeCode);
//!
//! assert!(msg.has_metadata());
//! ```
//!
//! ## Serialization
//!
//! ```
//! use transcriptor::{Message, Role};
//!
//! let msg = Message::new(Role::User, "Hello!");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::parser::Source;

/// The speaker of a message.
///
/// Tokenizers map tool-specific labels onto these three roles:
/// `**Claude**`, `**Cursor**`, `Assistant:` and `ChatGPT:` all normalize
/// to [`Role::Assistant`]; `**User**`, `Human:` and `You:` normalize to
/// [`Role::User`]. [`Role::System`] is reserved for formats that carry
/// system prompts; no current tokenizer emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human side of the conversation.
    User,
    /// The AI assistant side of the conversation.
    Assistant,
    /// A system prompt or injected instruction (reserved).
    System,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
            Role::System => write!(f, "system"),
        }
    }
}

/// Provenance metadata attached to a message.
///
/// `export_date` and `export_info` describe the transcript as a whole and
/// are therefore attached only to the first message of a parse, never to
/// later ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Which tokenizer produced this message.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub source: Option<Source>,

    /// Export date parsed from an `_Exported on <date> at <time> from <tool>_`
    /// header line, formatted as `"<date> <time>"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub export_date: Option<String>,

    /// The raw matched export header, underscores removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub export_info: Option<String>,
}

impl Metadata {
    /// Metadata carrying only a source tag.
    pub fn from_source(source: Source) -> Self {
        Self {
            source: Some(source),
            export_date: None,
            export_info: None,
        }
    }

    /// Returns `true` if every field is `None`.
    pub fn is_empty(&self) -> bool {
        self.source.is_none() && self.export_date.is_none() && self.export_info.is_none()
    }
}

/// One normalized conversational turn from any supported export format.
///
/// This struct is the sole output unit of the crate. All tokenizers convert
/// their native delimiter conventions into this representation.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `role` | `Role` | Who spoke: user, assistant, or system |
/// | `content` | `String` | Cleaned message body, never empty in parser output |
/// | `timestamp` | `Option<String>` | Reserved; no tokenizer populates it yet |
/// | `metadata` | `Option<Metadata>` | Source tag and export provenance |
///
/// # Serialization
///
/// Implements `Serialize` and `Deserialize` with these behaviors:
/// - Optional fields are omitted from JSON when `None`
/// - Metadata fields use camelCase names (`exportDate`, `exportInfo`)
/// - Plain data with no behavior, suitable for handing to a renderer
///
/// ```
/// use transcriptor::{Message, Role};
///
/// let msg = Message::new(Role::User, "Hello!");
/// let json = serde_json::to_string(&msg)?;
///
/// // timestamp and metadata are omitted (None)
/// assert!(!json.contains("timestamp"));
/// assert!(!json.contains("metadata"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who spoke this turn.
    pub role: Role,

    /// Cleaned text content of the turn.
    ///
    /// May contain newlines, code fences, and markdown. Blank-line runs are
    /// collapsed to at most one blank line during normalization.
    pub content: String,

    /// When the turn happened. Reserved: none of the supported export
    /// conventions carry per-message timestamps today.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Source tag and export provenance, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl Message {
    /// Creates a new message with only role and content.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transcriptor::{Message, Role};
    ///
    /// let msg = Message::new(Role::User, "Hello!");
    /// assert_eq!(msg.content(), "Hello!");
    /// assert!(msg.metadata().is_none());
    /// ```
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: None,
            metadata: None,
        }
    }

    /// Builder method to tag the message with its producing tokenizer.
    #[must_use]
    pub fn with_source(mut self, source: Source) -> Self {
        self.metadata.get_or_insert_with(Metadata::default).source = Some(source);
        self
    }

    /// Builder method to attach export provenance.
    ///
    /// Only the first message of a parse carries these fields.
    #[must_use]
    pub fn with_export(mut self, export_date: Option<String>, export_info: Option<String>) -> Self {
        let meta = self.metadata.get_or_insert_with(Metadata::default);
        meta.export_date = export_date;
        meta.export_info = export_info;
        self
    }

    /// Returns the role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the source tag, if present.
    pub fn source(&self) -> Option<Source> {
        self.metadata.as_ref().and_then(|m| m.source)
    }

    /// Returns the metadata, if present.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Returns `true` if this message carries any metadata.
    pub fn has_metadata(&self) -> bool {
        self.metadata.as_ref().is_some_and(|m| !m.is_empty())
    }

    /// Returns `true` if this message's content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
