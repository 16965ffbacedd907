//! Core domain types for tocify documents.

use serde::{Deserialize, Serialize};

/// Marker character used when no other is configured.
pub const DEFAULT_MARKER: char = '#';

// ---------------------------------------------------------------------------
// ClassifiedLine
// ---------------------------------------------------------------------------

/// One input line plus its derived heading classification.
///
/// `depth` is the count of consecutive marker characters at the start of the
/// line (0 = not a heading); `title` is the line with that leading run
/// removed. The original text is kept in `raw` because anchor identifiers are
/// derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// Zero-based position in the original line sequence.
    pub position: usize,
    /// The unmodified input line, leading markers included.
    pub raw: String,
    /// Heading nesting level; 0 means the line is plain text.
    pub depth: usize,
    /// The line with its leading marker run stripped.
    pub title: String,
}

impl ClassifiedLine {
    /// Whether this line starts a section.
    pub fn is_heading(&self) -> bool {
        self.depth >= 1
    }
}

// ---------------------------------------------------------------------------
// SectionEntry
// ---------------------------------------------------------------------------

/// A single entry in the rendered table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    /// Heading nesting level (≥ 1).
    pub depth: usize,
    /// Heading title with markers stripped. May be empty for marker-only lines.
    pub title: String,
    /// Anchor the entry links to; also carried by the matching body paragraph.
    pub anchor_id: String,
}

impl SectionEntry {
    /// Display label: one indent dash per nesting level past the first,
    /// directly followed by the title.
    pub fn label(&self) -> String {
        let indent = self.depth.saturating_sub(1);
        format!("{}{}", "-".repeat(indent), self.title)
    }
}

// ---------------------------------------------------------------------------
// BodyItem
// ---------------------------------------------------------------------------

/// One rendered paragraph of the document body.
///
/// Exactly one `BodyItem` exists per input line, in original order. Heading
/// lines become anchored paragraphs; everything else (empty lines included)
/// stays a plain paragraph with its text untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyItem {
    /// A paragraph carrying its line text verbatim.
    Plain { text: String },
    /// A heading paragraph that is an anchor target.
    Anchored { anchor_id: String, title: String },
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A fully assembled document, ready for rendering.
///
/// Built once per parse call, immutable afterwards, discarded after the HTML
/// string is produced — nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// TOC entries in heading encounter order.
    pub toc: Vec<SectionEntry>,
    /// Body paragraphs in original line order.
    pub body: Vec<BodyItem>,
}
