//! Document skeleton: html, head, body, title.

use std::io::Write;

use bookgen_core::Result;

use crate::HtmlEmitter;

impl<W: Write> HtmlEmitter<W> {
    /// Open the document root (`html`).
    pub fn root(&mut self) -> Result<()> {
        self.open("html")
    }

    /// Open the document root with attributes, e.g. `lang="en"`.
    pub fn root_with(&mut self, attrs: &str) -> Result<()> {
        self.open_with("html", attrs)
    }

    /// Close the document root.
    pub fn end_root(&mut self) -> Result<()> {
        self.close("html")
    }

    /// Open the metadata section (`head`).
    pub fn head(&mut self) -> Result<()> {
        self.open("head")
    }

    /// Close the metadata section.
    pub fn end_head(&mut self) -> Result<()> {
        self.close("head")
    }

    /// Open the document body.
    pub fn body(&mut self) -> Result<()> {
        self.open("body")
    }

    /// Open the document body with attributes.
    pub fn body_with(&mut self, attrs: &str) -> Result<()> {
        self.open_with("body", attrs)
    }

    /// Close the document body.
    pub fn end_body(&mut self) -> Result<()> {
        self.close("body")
    }

    /// Emit the document title element. Belongs inside `head`.
    pub fn doc_title(&mut self, title: &str) -> Result<()> {
        self.open("title")?;
        self.text(title)?;
        self.close("title")
    }
}

#[cfg(test)]
mod tests {
    use crate::HtmlEmitter;

    #[test]
    fn test_skeleton() {
        let mut output = Vec::new();
        let mut doc = HtmlEmitter::new(&mut output);
        doc.root_with("lang=\"en\"").unwrap();
        doc.head().unwrap();
        doc.doc_title("My Book").unwrap();
        doc.end_head().unwrap();
        doc.body().unwrap();
        doc.end_body().unwrap();
        doc.end_root().unwrap();
        assert_eq!(doc.finish().unwrap(), 0);

        let html = String::from_utf8(output).unwrap();
        assert_eq!(
            html,
            concat!(
                "<html lang=\"en\">\n",
                "  <head>\n",
                "    <title>\n",
                "      My Book\n",
                "    </title>\n",
                "  </head>\n",
                "  <body>\n",
                "  </body>\n",
                "</html>\n",
            )
        );
    }

    #[test]
    fn test_body_with_attrs() {
        let mut output = Vec::new();
        let mut doc = HtmlEmitter::new(&mut output);
        doc.body_with("class=\"cover\"").unwrap();
        doc.end_body().unwrap();
        doc.finish().unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "<body class=\"cover\">\n</body>\n"
        );
    }
}
