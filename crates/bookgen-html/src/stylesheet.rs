//! Stylesheet emission: external links, inlined files, and the built-in
//! theme.

use std::io::Write;
use std::path::Path;

use bookgen_config::Palette;
use bookgen_core::Result;

use crate::HtmlEmitter;

/// Render the built-in stylesheet for a palette.
///
/// `indent` is the whitespace used inside multi-line rule bodies. The
/// sheet carries everything the emitters rely on: the `.toc` list reset
/// and the `toc-L1`..`toc-L6` staggering, table borders, quote and figure
/// styling, and a print rule for page breaks.
pub fn default_css(palette: &Palette, indent: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    rule(
        &mut lines,
        indent,
        "body",
        &[
            "max-width: 800px;".into(),
            "margin: 40px auto;".into(),
            "padding: 0 20px;".into(),
            format!("color: {};", palette.text_primary),
            format!("background: {};", palette.bg_page),
            "font-family: serif;".into(),
        ],
    );

    lines.push(format!(
        "h1 {{ border-bottom: 2px solid {}; padding-bottom: 10px; }}",
        palette.border_primary
    ));

    rule(
        &mut lines,
        indent,
        "code",
        &[
            format!("background: {};", palette.bg_surface),
            "padding: 2px;".into(),
            "font-family: monospace;".into(),
        ],
    );

    rule(
        &mut lines,
        indent,
        "pre",
        &[
            format!("background: {};", palette.bg_surface),
            "padding: 15px;".into(),
            "overflow-x: auto;".into(),
            format!("border-left: 4px solid {};", palette.border_accent),
        ],
    );

    lines.push("a { text-decoration: underline; color: inherit; }".to_string());

    lines.push(".toc ul { list-style: none; padding-left: 0; }".to_string());
    lines.push(".toc a { text-decoration: none; }".to_string());

    lines.push(format!(
        "li.toc-L1 {{ font-weight: bold; margin-top: 10px; color: {}; }}",
        palette.text_primary
    ));
    lines.push(format!(
        "li.toc-L2 {{ padding-left: 20px; font-size: 0.95em; color: {}; }}",
        palette.text_primary
    ));
    lines.push(format!(
        "li.toc-L3 {{ padding-left: 40px; font-size: 0.9em; color: {}; }}",
        palette.text_secondary
    ));
    lines.push(format!(
        "li.toc-L4 {{ padding-left: 40px; font-size: 0.9em; color: {}; }}",
        palette.text_secondary
    ));
    lines.push(format!(
        "li.toc-L5 {{ padding-left: 50px; font-size: 0.9em; color: {}; }}",
        palette.text_muted
    ));
    lines.push(format!(
        "li.toc-L6 {{ padding-left: 60px; font-size: 0.9em; color: {}; }}",
        palette.text_muted
    ));

    lines.push("table { border-collapse: collapse; width: 100%; margin: 20px 0; }".to_string());
    lines.push(format!(
        "th, td {{ border: 1px solid {}; padding: 8px 10px; }}",
        palette.border_primary
    ));
    lines.push(format!(
        "th {{ background: {}; font-weight: bold; text-align: left; }}",
        palette.bg_subtle
    ));
    lines.push(format!(
        "caption {{ caption-side: bottom; font-size: 0.9em; color: {}; margin-top: 8px; }}",
        palette.text_muted
    ));

    lines.push("@media print { body { max-width: 100%; margin: 0; } }".to_string());

    rule(
        &mut lines,
        indent,
        "blockquote",
        &[
            "margin: 1.5em 0;".into(),
            "padding: 0.75em 1.5em;".into(),
            format!("border-left: 4px solid {};", palette.border_accent),
            format!("background: {};", palette.bg_surface),
            format!("color: {};", palette.text_secondary),
        ],
    );

    rule(
        &mut lines,
        indent,
        "blockquote p",
        &["margin: 0;".into(), "font-style: italic;".into()],
    );

    rule(
        &mut lines,
        indent,
        "blockquote footer",
        &[
            "margin-top: 0.5em;".into(),
            "font-size: 0.9em;".into(),
            format!("color: {};", palette.text_muted),
        ],
    );

    rule(
        &mut lines,
        indent,
        "figcaption",
        &[
            "margin-top: 0.5em;".into(),
            "font-size: 0.9em;".into(),
            format!("color: {};", palette.text_muted),
            "text-align: center;".into(),
        ],
    );

    rule(
        &mut lines,
        indent,
        "figure",
        &[
            "margin: 1.5em auto;".into(),
            "text-align: center;".into(),
            "width: fit-content;".into(),
        ],
    );

    rule(
        &mut lines,
        indent,
        "figure img",
        &["display: block;".into(), "margin: 0 auto;".into()],
    );

    let mut css = lines.join("\n");
    css.push('\n');
    css
}

/// Push one multi-line rule: selector, indented declarations, closing brace.
fn rule(lines: &mut Vec<String>, indent: &str, selector: &str, body: &[String]) {
    lines.push(format!("{} {{", selector));
    for decl in body {
        lines.push(format!("{}{}", indent, decl));
    }
    lines.push("}".to_string());
}

impl<W: Write> HtmlEmitter<W> {
    /// Emit a stylesheet link element. Belongs inside `head`.
    pub fn stylesheet_link(&mut self, href: &str) -> Result<()> {
        self.void_with("link", &format!("rel=\"stylesheet\" href=\"{}\"", href))
    }

    /// Emit an inline `style` block with the built-in theme for the
    /// configured palette. Belongs inside `head`.
    pub fn default_stylesheet(&mut self) -> Result<()> {
        let css = default_css(&self.palette, &self.indent_unit.clone());
        self.open("style")?;
        for line in css.lines() {
            self.text(line)?;
        }
        self.close("style")
    }

    /// Inline a stylesheet file into a `style` block.
    ///
    /// An unreadable file is silently omitted: a missing optional
    /// stylesheet degrades the document's looks, not its content.
    pub fn stylesheet_inline_from(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let css = match std::fs::read_to_string(path.as_ref()) {
            Ok(css) => css,
            Err(_) => return Ok(()),
        };

        self.open("style")?;
        for line in css.lines() {
            self.text(line)?;
        }
        self.close("style")
    }
}
