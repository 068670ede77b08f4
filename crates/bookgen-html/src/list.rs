//! List emission: unordered, ordered, and items.
//!
//! Lists nest by interleaving calls: open a list, emit items, open a
//! sublist between items, close in reverse order. Depth tracking keeps
//! the markup indented correctly at every nesting level.

use std::io::Write;

use bookgen_core::Result;

use crate::HtmlEmitter;

impl<W: Write> HtmlEmitter<W> {
    /// Emit one list item. Belongs inside `ul` or `ol`.
    pub fn list_item(&mut self, txt: &str) -> Result<()> {
        self.open("li")?;
        self.text(txt)?;
        self.close("li")
    }

    /// Open an unordered list.
    pub fn unordered_list(&mut self) -> Result<()> {
        self.open("ul")
    }

    /// Open an unordered list with attributes.
    pub fn unordered_list_with(&mut self, attrs: &str) -> Result<()> {
        self.open_with("ul", attrs)
    }

    /// Close an unordered list.
    pub fn end_unordered_list(&mut self) -> Result<()> {
        self.close("ul")
    }

    /// Open an ordered list.
    pub fn ordered_list(&mut self) -> Result<()> {
        self.open("ol")
    }

    /// Open an ordered list with attributes.
    pub fn ordered_list_with(&mut self, attrs: &str) -> Result<()> {
        self.open_with("ol", attrs)
    }

    /// Close an ordered list.
    pub fn end_ordered_list(&mut self) -> Result<()> {
        self.close("ol")
    }
}
