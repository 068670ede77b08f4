//! Plain text, links, quotations, and breaks.

use std::io::Write;

use bookgen_core::Result;

use crate::HtmlEmitter;

impl<W: Write> HtmlEmitter<W> {
    /// Emit a standalone paragraph element.
    pub fn paragraph(&mut self, txt: &str) -> Result<()> {
        self.open("p")?;
        self.text(txt)?;
        self.close("p")
    }

    /// Emit a hyperlink on its own line.
    pub fn hyperlink(&mut self, url: &str, label: &str) -> Result<()> {
        self.text(&format!("<a href=\"{}\">{}</a>", url, label))
    }

    /// Emit a block quotation with an optional attribution footer.
    pub fn quote(&mut self, quote: &str, author: Option<&str>) -> Result<()> {
        self.open("blockquote")?;

        self.open("p")?;
        self.text(quote)?;
        self.close("p")?;

        if let Some(author) = author.filter(|a| !a.is_empty()) {
            self.open("footer")?;
            self.text(&format!("— {}", author))?;
            self.close("footer")?;
        }

        self.close("blockquote")
    }

    /// Emit `howmany` line breaks.
    pub fn line_breaks(&mut self, howmany: usize) -> Result<()> {
        for _ in 0..howmany {
            self.void("br")?;
        }
        Ok(())
    }

    /// Emit a page break for print/PDF output.
    pub fn page_break(&mut self) -> Result<()> {
        self.text("<div style=\"break-after: page;\"></div>")
    }
}

#[cfg(test)]
mod tests {
    use crate::HtmlEmitter;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut HtmlEmitter<&mut Vec<u8>>),
    {
        let mut output = Vec::new();
        let mut doc = HtmlEmitter::new(&mut output);
        f(&mut doc);
        doc.finish().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_paragraph() {
        let html = render(|doc| doc.paragraph("Hello <i>there</i>.").unwrap());
        assert_eq!(html, "<p>\n  Hello <i>there</i>.\n</p>\n");
    }

    #[test]
    fn test_hyperlink() {
        let html = render(|doc| doc.hyperlink("https://example.com", "the site").unwrap());
        assert_eq!(html, "<a href=\"https://example.com\">the site</a>\n");
    }

    #[test]
    fn test_quote_with_author() {
        let html = render(|doc| doc.quote("Brevity.", Some("Anon")).unwrap());
        assert_eq!(
            html,
            concat!(
                "<blockquote>\n",
                "  <p>\n",
                "    Brevity.\n",
                "  </p>\n",
                "  <footer>\n",
                "    — Anon\n",
                "  </footer>\n",
                "</blockquote>\n",
            )
        );
    }

    #[test]
    fn test_quote_without_author() {
        let html = render(|doc| doc.quote("Alone.", None).unwrap());
        assert!(!html.contains("footer"));

        let html = render(|doc| doc.quote("Alone.", Some("")).unwrap());
        assert!(!html.contains("footer"));
    }

    #[test]
    fn test_line_breaks() {
        let html = render(|doc| doc.line_breaks(3).unwrap());
        assert_eq!(html, "<br>\n<br>\n<br>\n");

        let html = render(|doc| doc.line_breaks(0).unwrap());
        assert!(html.is_empty());
    }

    #[test]
    fn test_page_break_indented() {
        let html = render(|doc| {
            doc.body().unwrap();
            doc.page_break().unwrap();
            doc.end_body().unwrap();
        });
        assert!(html.contains("  <div style=\"break-after: page;\"></div>\n"));
    }
}
