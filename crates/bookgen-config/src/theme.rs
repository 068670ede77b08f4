//! Visual styling configuration.
//!
//! This module contains the `StyleConfig` struct for output formatting
//! settings and the `Palette` resolved from the selected theme.

use bookgen_core::Theme;
use serde::{Deserialize, Serialize};

/// Style configuration.
///
/// Controls source indentation and the built-in stylesheet theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StyleConfig {
    /// Spaces per indentation level in the emitted HTML source.
    /// Default: 2
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Built-in stylesheet theme.
    /// Default: Light
    #[serde(default)]
    pub theme: Theme,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            theme: Theme::Light,
        }
    }
}

impl StyleConfig {
    /// Merge another StyleConfig into this one.
    pub fn merge(&mut self, other: &StyleConfig) {
        self.indent_width = other.indent_width;
        self.theme = other.theme;
    }

    /// The whitespace emitted per indentation level.
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }

    /// Resolve the color palette for the configured theme.
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }
}

/// The named colors the built-in stylesheet is written in terms of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Body text
    pub text_primary: &'static str,
    /// Quotations and level-3/4 TOC entries
    pub text_secondary: &'static str,
    /// Captions and deep TOC entries
    pub text_muted: &'static str,
    /// Page background
    pub bg_page: &'static str,
    /// Table header background
    pub bg_subtle: &'static str,
    /// Code and quote surfaces
    pub bg_surface: &'static str,
    /// Rules and table borders
    pub border_primary: &'static str,
    /// Left accents on pre/blockquote
    pub border_accent: &'static str,
}

impl Palette {
    /// Dark text on a white page.
    pub fn light() -> Self {
        Self {
            text_primary: "#333333",
            text_secondary: "#666666",
            text_muted: "#888888",
            bg_page: "#ffffff",
            bg_subtle: "#eeeeee",
            bg_surface: "#f5f5f5",
            border_primary: "#cccccc",
            border_accent: "#bbbbbb",
        }
    }

    /// Light text on a near-black page.
    pub fn dark() -> Self {
        Self {
            text_primary: "#e6e6e6",
            text_secondary: "#b3b3b3",
            text_muted: "#9a9a9a",
            bg_page: "#121212",
            bg_subtle: "#242424",
            bg_surface: "#1e1e1e",
            border_primary: "#3a3a3a",
            border_accent: "#4a4a4a",
        }
    }

    /// Resolve a theme to its palette.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }
}

fn default_indent_width() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let style = StyleConfig::default();
        assert_eq!(style.indent_width, 2);
        assert_eq!(style.theme, Theme::Light);
        assert_eq!(style.indent_unit(), "  ");
    }

    #[test]
    fn test_serde_pascal_case() {
        let style: StyleConfig = toml::from_str(
            r#"
            IndentWidth = 4
            Theme = "Dark"
        "#,
        )
        .unwrap();
        assert_eq!(style.indent_width, 4);
        assert_eq!(style.theme, Theme::Dark);
        assert_eq!(style.indent_unit(), "    ");
    }

    #[test]
    fn test_palettes_differ() {
        let light = Palette::light();
        let dark = Palette::dark();
        assert_ne!(light.bg_page, dark.bg_page);
        assert_eq!(light.bg_page, "#ffffff");
        assert_eq!(dark.bg_page, "#121212");
    }

    #[test]
    fn test_palette_follows_theme() {
        let mut style = StyleConfig::default();
        assert_eq!(style.palette(), Palette::light());
        style.theme = Theme::Dark;
        assert_eq!(style.palette(), Palette::dark());
    }
}
