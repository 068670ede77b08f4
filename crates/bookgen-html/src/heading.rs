//! Numbered heading emission.
//!
//! Each heading call advances the chapter counters, records a TOC entry,
//! and emits one `<hN>` line whose anchor id equals the dotted chapter
//! number, so the TOC rendered later can link back to it.

use std::io::Write;

use bookgen_core::Result;

use crate::HtmlEmitter;

/// Format the heading line: `<hN id="NUM">NUM TITLE</hN>`.
///
/// The anchor identifier and the displayed prefix are the same formatted
/// number, which is what makes TOC links resolvable without a separate id
/// registry.
pub fn heading_line(level: usize, number: &str, title: &str) -> String {
    format!(
        "<h{level} id=\"{number}\">{number} {title}</h{level}>",
        level = level,
        number = number,
        title = title
    )
}

impl<W: Write> HtmlEmitter<W> {
    /// Emit a numbered heading and return its chapter number.
    ///
    /// The number is a pure function of the prior heading sequence: the
    /// counter for `level` is incremented and every deeper counter is
    /// zeroed, so e.g. a level-2 heading after `1.2.3.` yields `1.3.`.
    ///
    /// # Errors
    ///
    /// Propagates the contract errors of
    /// [`DocumentState::record_heading`](bookgen_core::DocumentState::record_heading);
    /// a refused heading emits nothing and mutates nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use bookgen_html::HtmlEmitter;
    ///
    /// let mut output = Vec::new();
    /// let mut doc = HtmlEmitter::new(&mut output);
    /// assert_eq!(doc.heading(1, "Intro").unwrap(), "1.");
    /// assert_eq!(doc.heading(2, "Setup").unwrap(), "1.1.");
    /// ```
    pub fn heading(&mut self, level: usize, title: &str) -> Result<String> {
        let number = self.state.record_heading(level, title, self.policy)?;
        let line = heading_line(level, &number, title);
        self.text(&line)?;
        Ok(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HtmlEmitter;
    use bookgen_core::{BookgenError, HeadingPolicy};

    #[test]
    fn test_heading_line_format() {
        assert_eq!(
            heading_line(2, "1.2.", "Setup"),
            "<h2 id=\"1.2.\">1.2. Setup</h2>"
        );
    }

    #[test]
    fn test_heading_emits_anchor_and_number() {
        let mut output = Vec::new();
        let mut doc = HtmlEmitter::new(&mut output);
        doc.body().unwrap();
        doc.heading(1, "Intro").unwrap();
        doc.heading(2, "Setup").unwrap();
        doc.end_body().unwrap();
        doc.finish().unwrap();

        let html = String::from_utf8(output).unwrap();
        assert!(html.contains("  <h1 id=\"1.\">1. Intro</h1>\n"));
        assert!(html.contains("  <h2 id=\"1.1.\">1.1. Setup</h2>\n"));
    }

    #[test]
    fn test_heading_indented_at_current_depth() {
        let mut output = Vec::new();
        let mut doc = HtmlEmitter::new(&mut output);
        doc.open("div").unwrap();
        doc.open("div").unwrap();
        doc.heading(1, "Deep").unwrap();
        doc.close("div").unwrap();
        doc.close("div").unwrap();
        doc.finish().unwrap();

        let html = String::from_utf8(output).unwrap();
        assert!(html.contains("    <h1 id=\"1.\">1. Deep</h1>\n"));
    }

    #[test]
    fn test_invalid_level_emits_nothing() {
        let mut output = Vec::new();
        let mut doc = HtmlEmitter::new(&mut output);
        assert!(matches!(
            doc.heading(7, "nope"),
            Err(BookgenError::InvalidHeadingLevel(7))
        ));
        doc.finish().unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_strict_policy_refusal_records_nothing() {
        let mut output = Vec::new();
        let mut doc = HtmlEmitter::new(&mut output);
        doc.set_policy(HeadingPolicy::Strict);
        doc.heading(1, "Intro").unwrap();
        assert!(matches!(
            doc.heading(3, "Details"),
            Err(BookgenError::HeadingJump { level: 3, missing: 2 })
        ));
        assert_eq!(doc.toc_entries().len(), 1);
    }
}
