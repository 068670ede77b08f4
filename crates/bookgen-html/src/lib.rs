//! Bookgen HTML
//!
//! This crate provides the HTML emission engine for bookgen, turning a
//! sequence of structural and textual calls into indented,
//! chapter-numbered HTML written incrementally to an output sink.
//!
//! # Features
//!
//! - **Indentation-aware primitives** - open/close/void tags tracked by depth
//! - **Numbered headings** - 6 levels with automatic dotted chapter numbers
//! - **Replayable TOC** - every heading is recorded and rendered on demand
//! - **Built-in stylesheet** - light and dark palettes, or external CSS
//! - **Asset embedding** - images inlined as base64 `data:` URIs
//!
//! # Example
//!
//! ```
//! use bookgen_html::HtmlEmitter;
//!
//! let mut output = Vec::new();
//! let mut doc = HtmlEmitter::new(&mut output);
//!
//! doc.root_with("lang=\"en\"").unwrap();
//! doc.body().unwrap();
//! let number = doc.heading(1, "Hello World").unwrap();
//! assert_eq!(number, "1.");
//! doc.end_body().unwrap();
//! doc.end_root().unwrap();
//! assert_eq!(doc.finish().unwrap(), 0);
//! ```
//!
//! Content strings are trusted HTML: nothing is escaped, so callers may
//! embed inline markup (`<i>`, `<a href=...>`, entities) directly.

pub mod code;
pub mod heading;
pub mod image;
pub mod list;
pub mod structure;
pub mod stylesheet;
pub mod table;
pub mod text;
pub mod toc;

pub use image::data_uri;
pub use stylesheet::default_css;

use std::io::Write;

use bookgen_config::{Config, Palette};
use bookgen_core::{DocumentState, HeadingPolicy, Result, TocEntry};

/// Incremental HTML emitter.
///
/// Owns the output sink and all per-document state. Every method writes
/// its markup immediately; nothing is buffered beyond the sink itself.
/// Create one emitter per document; independent emitters never interfere.
pub struct HtmlEmitter<W: Write> {
    /// Output sink
    pub(crate) writer: W,
    /// Depth, chapter counters, TOC registry
    pub(crate) state: DocumentState,
    /// Heading level-jump policy
    pub(crate) policy: HeadingPolicy,
    /// Whitespace written per depth level
    pub(crate) indent_unit: String,
    /// Colors for the built-in stylesheet
    pub(crate) palette: Palette,
}

impl<W: Write> HtmlEmitter<W> {
    /// Create an emitter with default settings: relaxed heading policy,
    /// two-space indentation, light palette, default TOC capacity.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            state: DocumentState::new(),
            policy: HeadingPolicy::Relaxed,
            indent_unit: "  ".to_string(),
            palette: Palette::light(),
        }
    }

    /// Create an emitter configured from a [`Config`].
    pub fn with_config(writer: W, config: &Config) -> Self {
        Self {
            writer,
            state: DocumentState::with_toc_capacity(config.document.toc_capacity),
            policy: config.document.heading_policy,
            indent_unit: config.style.indent_unit(),
            palette: config.style.palette(),
        }
    }

    /// Set the heading level-jump policy.
    pub fn set_policy(&mut self, policy: HeadingPolicy) {
        self.policy = policy;
    }

    /// Set the palette used by [`default_stylesheet`](Self::default_stylesheet).
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.state.depth()
    }

    /// Headings recorded so far, in document order.
    pub fn toc_entries(&self) -> &[TocEntry] {
        self.state.toc_entries()
    }

    /// Write the indentation prefix for the current depth.
    pub(crate) fn write_indent(&mut self) -> Result<()> {
        for _ in 0..self.state.depth() {
            self.writer.write_all(self.indent_unit.as_bytes())?;
        }
        Ok(())
    }

    /// Emit an opening tag and deepen subsequent output.
    ///
    /// The tag line itself sits at the parent's indentation; everything
    /// until the matching [`close`](Self::close) is one level deeper.
    pub fn open(&mut self, tag: &str) -> Result<()> {
        self.write_indent()?;
        writeln!(self.writer, "<{}>", tag)?;
        self.state.enter();
        Ok(())
    }

    /// Emit an opening tag with attributes.
    pub fn open_with(&mut self, tag: &str, attrs: &str) -> Result<()> {
        self.write_indent()?;
        writeln!(self.writer, "<{} {}>", tag, attrs)?;
        self.state.enter();
        Ok(())
    }

    /// Emit a closing tag, aligned with its opener.
    ///
    /// The depth decreases *before* the line is written. A call without a
    /// matching open returns
    /// [`UnbalancedClose`](bookgen_core::BookgenError::UnbalancedClose)
    /// and writes nothing, so later output stays well-indented even if the
    /// caller ignores the error.
    pub fn close(&mut self, tag: &str) -> Result<()> {
        self.state.exit()?;
        self.write_indent()?;
        writeln!(self.writer, "</{}>", tag)?;
        Ok(())
    }

    /// Emit a self-contained tag (`br`, `hr`, `img`, ...); depth unchanged.
    pub fn void(&mut self, tag: &str) -> Result<()> {
        self.write_indent()?;
        writeln!(self.writer, "<{}>", tag)?;
        Ok(())
    }

    /// Emit a self-contained tag with attributes.
    pub fn void_with(&mut self, tag: &str, attrs: &str) -> Result<()> {
        self.write_indent()?;
        writeln!(self.writer, "<{} {}>", tag, attrs)?;
        Ok(())
    }

    /// Emit one indented line of content.
    pub fn text(&mut self, txt: &str) -> Result<()> {
        self.write_indent()?;
        writeln!(self.writer, "{}", txt)?;
        Ok(())
    }

    /// Emit content exactly as given: no indentation, no newline.
    pub fn raw(&mut self, txt: &str) -> Result<()> {
        write!(self.writer, "{}", txt)?;
        Ok(())
    }

    /// Flush the sink and return the residual depth.
    ///
    /// A well-formed document ends at depth zero; a nonzero result means
    /// some open went unclosed. Balancing is the caller's obligation, so
    /// the leftover is reported rather than treated as an error.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.state.depth())
    }

    /// Consume the emitter and return the sink without flushing.
    ///
    /// Useful when the sink is an owned in-memory buffer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
