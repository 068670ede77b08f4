//! Table of contents rendering.
//!
//! The TOC replays the heading registry accumulated during the document
//! body. It records its own heading first, then renders every *earlier*
//! entry as a linked list item; excluding exactly the last-recorded entry
//! is what keeps the TOC from listing itself, without ever comparing
//! titles (titles are not unique).

use std::io::Write;

use bookgen_core::{Result, TocEntry};

use crate::HtmlEmitter;

/// Default title for the TOC's own heading.
pub const TOC_TITLE: &str = "Table of Contents";

/// Format one TOC list item: a link to the heading's anchor, classed by
/// level (`toc-L1` .. `toc-L6`) so the stylesheet can stagger indentation.
pub fn toc_item(entry: &TocEntry) -> String {
    format!(
        "<li class=\"toc-L{level}\"><a href=\"#{number}\">{number} {title}</a></li>",
        level = entry.level,
        number = entry.number,
        title = entry.title
    )
}

impl<W: Write> HtmlEmitter<W> {
    /// Render the table of contents with the default title, all levels.
    ///
    /// Use at the end of the document, after every heading is recorded.
    pub fn toc(&mut self) -> Result<()> {
        self.toc_with(TOC_TITLE, 0)
    }

    /// Render the table of contents.
    ///
    /// `max_depth` filters which entries render: `0` renders all levels,
    /// otherwise entries with `level > max_depth` are skipped. Filtering
    /// never reorders; entries keep document order.
    ///
    /// The TOC gets a level-1 heading and chapter number of its own, which
    /// is recorded like any other heading but excluded from the listing by
    /// position.
    pub fn toc_with(&mut self, title: &str, max_depth: usize) -> Result<()> {
        self.open_with("div", "class=\"toc\"")?;
        self.heading(1, title)?;
        self.open("ul")?;

        // The heading call above appended the TOC's own entry last.
        let items: Vec<String> = {
            let entries = self.state.toc_entries();
            entries[..entries.len() - 1]
                .iter()
                .filter(|e| max_depth == 0 || (e.level as usize) <= max_depth)
                .map(toc_item)
                .collect()
        };
        for item in &items {
            self.text(item)?;
        }

        self.close("ul")?;
        self.close("div")
    }
}
