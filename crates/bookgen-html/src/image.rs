//! Image emission: external references, figures, and embedded assets.
//!
//! Embedded images are read from disk and inlined as base64 `data:` URIs,
//! producing a self-contained document with no external asset files.

use std::io::Write;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use bookgen_core::Result;

use crate::HtmlEmitter;

/// Read a file and encode it as a `data:` URI.
///
/// The MIME type is inferred from the file extension; unknown extensions
/// fall back to `application/octet-stream`, which browsers still render
/// for most image content. An unreadable file is an error: an image the
/// caller asked to embed is part of the document, unlike an optional
/// stylesheet.
pub fn data_uri(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let mime = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    };
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(&bytes)))
}

impl<W: Write> HtmlEmitter<W> {
    /// Emit an image referencing an external source.
    pub fn image(&mut self, src: &str) -> Result<()> {
        self.void_with("img", &format!("src=\"{}\"", src))
    }

    /// Emit an image with extra attributes (width, alt, ...).
    pub fn image_with(&mut self, src: &str, attrs: &str) -> Result<()> {
        self.void_with("img", &format!("src=\"{}\" {}", src, attrs))
    }

    /// Emit an image embedded from a local file as a `data:` URI.
    pub fn image_embedded(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let uri = data_uri(path.as_ref())?;
        self.image(&uri)
    }

    /// Emit an embedded image with extra attributes.
    pub fn image_embedded_with(&mut self, path: impl AsRef<Path>, attrs: &str) -> Result<()> {
        let uri = data_uri(path.as_ref())?;
        self.image_with(&uri, attrs)
    }

    /// Open a figure.
    pub fn figure(&mut self) -> Result<()> {
        self.open("figure")
    }

    /// Close a figure.
    pub fn end_figure(&mut self) -> Result<()> {
        self.close("figure")
    }

    /// Emit a figure caption. Belongs inside `figure`.
    pub fn figure_caption(&mut self, txt: &str) -> Result<()> {
        self.open("figcaption")?;
        self.text(txt)?;
        self.close("figcaption")
    }
}
