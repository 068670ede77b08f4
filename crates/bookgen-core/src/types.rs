//! Core types for bookgen

use serde::{Deserialize, Serialize};

/// A single recorded heading.
///
/// Entries are appended once per heading call and replayed, in insertion
/// order, when the table of contents is rendered. The title is owned so
/// callers may pass transient strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Dot-terminated chapter number, e.g. `"2.2.10."`; doubles as the anchor id
    pub number: String,
    /// Heading level in `[1,6]`
    pub level: u8,
    /// Heading title as passed by the caller
    pub title: String,
}

impl TocEntry {
    /// Create a new entry from a formatted number, level, and title.
    pub fn new(number: impl Into<String>, level: u8, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            level,
            title: title.into(),
        }
    }
}
