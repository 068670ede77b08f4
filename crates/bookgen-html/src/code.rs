//! Code emission.
//!
//! Code block content goes inside `pre` byte-exact: no indentation is
//! inserted into it, since leading whitespace inside `pre` is rendered
//! literally. Callers escape `<`, `>`, and `&` themselves.

use std::io::Write;

use bookgen_core::Result;

use crate::HtmlEmitter;

impl<W: Write> HtmlEmitter<W> {
    /// Emit a multiline code block. Whitespace and newlines in `code` are
    /// preserved exactly as written.
    pub fn code_block(&mut self, code: &str) -> Result<()> {
        self.write_indent()?;
        self.raw("<pre>")?;
        self.raw(code)?;
        self.raw("</pre>\n")
    }

    /// Emit an inline code element.
    pub fn inline_code(&mut self, code: &str) -> Result<()> {
        self.open("code")?;
        self.text(code)?;
        self.close("code")
    }
}

#[cfg(test)]
mod tests {
    use crate::HtmlEmitter;

    #[test]
    fn test_code_block_preserves_content() {
        let mut output = Vec::new();
        let mut doc = HtmlEmitter::new(&mut output);
        doc.body().unwrap();
        doc.code_block("fn main() {\n    println!(\"hi\");\n}").unwrap();
        doc.end_body().unwrap();
        doc.finish().unwrap();

        let html = String::from_utf8(output).unwrap();
        // The opening tag is indented; the content is not touched.
        assert!(html.contains("  <pre>fn main() {\n    println!(\"hi\");\n}</pre>\n"));
    }

    #[test]
    fn test_inline_code() {
        let mut output = Vec::new();
        let mut doc = HtmlEmitter::new(&mut output);
        doc.inline_code("x &lt; y").unwrap();
        doc.finish().unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "<code>\n  x &lt; y\n</code>\n"
        );
    }
}
