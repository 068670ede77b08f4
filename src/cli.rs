//! Command-line interface for Bookgen.

use clap::Parser;
use std::path::PathBuf;

use bookgen_core::Theme;

/// Bookgen - a programmatic HTML book generator.
///
/// Emits an indented, chapter-numbered HTML document with a linked table
/// of contents, styled by a built-in light or dark theme.
#[derive(Parser, Debug)]
#[command(
    name = "bookgen",
    author = "Bookgen Contributors",
    version,
    about = "Generate indented, chapter-numbered HTML books",
    after_help = "Examples:\n  \
                  bookgen > book.html\n  \
                  bookgen -o book.html --theme dark\n  \
                  bookgen -c custom.toml --toc-depth 2\n  \
                  bookgen --css styles/default-light.css"
)]
pub struct Cli {
    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Stylesheet theme (light or dark)
    #[arg(short = 't', long = "theme")]
    pub theme: Option<String>,

    /// Deepest heading level listed in the TOC (0 = all levels)
    #[arg(long = "toc-depth")]
    pub toc_depth: Option<usize>,

    /// Refuse headings that skip a level instead of numbering through zero
    #[arg(long = "strict")]
    pub strict: bool,

    /// Print the default configuration and exit
    #[arg(long = "print-config")]
    pub print_config: bool,

    /// Write the default stylesheet to a standalone CSS file and exit
    #[arg(long = "css", value_name = "FILE")]
    pub css: Option<PathBuf>,
}

impl Cli {
    /// Parse the theme argument if provided and recognized.
    pub fn parse_theme(&self) -> Option<Theme> {
        match self.theme.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("light") => Some(Theme::Light),
            Some("dark") => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["bookgen"]);
        assert!(cli.output.is_none());
        assert_eq!(cli.log_level, "warn");
        assert!(cli.config.is_none());
        assert!(!cli.strict);
        assert!(!cli.print_config);
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "bookgen",
            "-o", "book.html",
            "-l", "debug",
            "--theme", "dark",
            "--toc-depth", "3",
            "--strict",
        ]);
        assert_eq!(cli.output, Some(PathBuf::from("book.html")));
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.toc_depth, Some(3));
        assert!(cli.strict);
    }

    #[test]
    fn test_parse_theme() {
        let cli = Cli::parse_from(["bookgen", "--theme", "Dark"]);
        assert_eq!(cli.parse_theme(), Some(Theme::Dark));

        let cli = Cli::parse_from(["bookgen", "--theme", "light"]);
        assert_eq!(cli.parse_theme(), Some(Theme::Light));

        let cli = Cli::parse_from(["bookgen", "--theme", "sepia"]);
        assert_eq!(cli.parse_theme(), None);

        let cli = Cli::parse_from(["bookgen"]);
        assert_eq!(cli.parse_theme(), None);
    }

    #[test]
    fn test_cli_parse_css_dump() {
        let cli = Cli::parse_from(["bookgen", "--css", "out.css"]);
        assert_eq!(cli.css, Some(PathBuf::from("out.css")));
    }
}
