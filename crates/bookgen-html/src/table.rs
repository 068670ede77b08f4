//! Table emission: table, rows, cells, caption.

use std::io::Write;

use bookgen_core::Result;

use crate::HtmlEmitter;

impl<W: Write> HtmlEmitter<W> {
    /// Open a table.
    pub fn table(&mut self) -> Result<()> {
        self.open("table")
    }

    /// Open a table with attributes.
    pub fn table_with(&mut self, attrs: &str) -> Result<()> {
        self.open_with("table", attrs)
    }

    /// Close a table.
    pub fn end_table(&mut self) -> Result<()> {
        self.close("table")
    }

    /// Open a table row.
    pub fn row(&mut self) -> Result<()> {
        self.open("tr")
    }

    /// Open a table row with attributes.
    pub fn row_with(&mut self, attrs: &str) -> Result<()> {
        self.open_with("tr", attrs)
    }

    /// Close a table row.
    pub fn end_row(&mut self) -> Result<()> {
        self.close("tr")
    }

    /// Emit a header cell.
    pub fn header_cell(&mut self, txt: &str) -> Result<()> {
        self.open("th")?;
        self.text(txt)?;
        self.close("th")
    }

    /// Emit a header cell with attributes (colspan, align, ...).
    pub fn header_cell_with(&mut self, txt: &str, attrs: &str) -> Result<()> {
        self.open_with("th", attrs)?;
        self.text(txt)?;
        self.close("th")
    }

    /// Emit a data cell.
    pub fn data_cell(&mut self, txt: &str) -> Result<()> {
        self.open("td")?;
        self.text(txt)?;
        self.close("td")
    }

    /// Emit a data cell with attributes (colspan, align, ...).
    pub fn data_cell_with(&mut self, txt: &str, attrs: &str) -> Result<()> {
        self.open_with("td", attrs)?;
        self.text(txt)?;
        self.close("td")
    }

    /// Emit the table caption. Belongs directly inside `table`.
    pub fn caption(&mut self, txt: &str) -> Result<()> {
        self.open("caption")?;
        self.text(txt)?;
        self.close("caption")
    }
}
