//! The showcase document.
//!
//! Exercises every emitter the library ships, so the generated file works
//! both as a demo book and as something to eyeball after changes.

use std::io::Write;

use bookgen_core::Result;
use bookgen_html::HtmlEmitter;

const CODE_SAMPLE: &str = "use bookgen_html::HtmlEmitter;\n\
\n\
let mut doc = HtmlEmitter::new(std::io::stdout());\n\
doc.heading(1, \"Hello\")?;";

/// Write the showcase book into an emitter.
pub fn write<W: Write>(doc: &mut HtmlEmitter<W>, toc_depth: usize) -> Result<()> {
    doc.root_with("lang=\"en\"")?;

    doc.head()?;
    doc.doc_title("Bookgen Showcase")?;
    doc.default_stylesheet()?;
    doc.end_head()?;

    doc.body()?;

    doc.heading(1, "Chapters and Numbering")?;

    doc.heading(2, "How the numbers work")?;
    doc.text("Every heading gets a dotted chapter number derived from its level.")?;
    doc.text("Opening a new parent section restarts the numbering underneath it.")?;

    doc.heading(2, "Anchors")?;
    doc.text(
        "Each heading carries its number as an anchor id, \
         so the closing table of contents can link straight to it.",
    )?;

    doc.heading(1, "Body Elements")?;

    doc.heading(2, "Text and links")?;
    doc.text("Text is emitted verbatim, so inline markup like <i>italics</i> just works.")?;
    doc.line_breaks(2)?;
    doc.hyperlink("https://example.com", "An explicit hyperlink element.")?;
    doc.quote("A book is a machine to think with.", Some("I. A. Richards"))?;

    doc.heading(2, "Code")?;
    doc.text("Short fragments go in an inline element:")?;
    doc.inline_code("doc.heading(2, \"Code\")")?;
    doc.text("Longer listings keep their whitespace exactly:")?;
    doc.code_block(CODE_SAMPLE)?;

    doc.heading(2, "Lists")?;
    doc.unordered_list()?;
    doc.list_item("First point")?;
    doc.list_item("Second point")?;
    doc.ordered_list()?;
    doc.list_item("Nested step one")?;
    doc.list_item("Nested step two")?;
    doc.end_ordered_list()?;
    doc.list_item("Closing point")?;
    doc.end_unordered_list()?;

    doc.page_break()?;

    doc.heading(2, "Tables")?;
    doc.table()?;
    doc.caption("Heading levels and their TOC styling")?;
    doc.row()?;
    doc.header_cell("Level")?;
    doc.header_cell("TOC class")?;
    doc.end_row()?;
    doc.row()?;
    doc.data_cell("1")?;
    doc.data_cell("toc-L1, bold")?;
    doc.end_row()?;
    doc.row()?;
    doc.data_cell("3")?;
    doc.data_cell("toc-L3, indented")?;
    doc.end_row()?;
    doc.end_table()?;

    doc.heading(2, "Figures")?;
    doc.figure()?;
    doc.image_with(
        "https://upload.wikimedia.org/wikipedia/commons/6/62/Gutenberg_Bible.jpg",
        "width=\"250px\"",
    )?;
    doc.figure_caption("Embedded and referenced images both sit inside figures.")?;
    doc.end_figure()?;

    doc.page_break()?;

    doc.toc_with("Table of Contents", toc_depth)?;

    doc.end_body()?;
    doc.end_root()
}
