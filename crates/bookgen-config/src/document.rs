//! Document behavior configuration.
//!
//! This module contains the `DocumentConfig` struct which holds the
//! heading policy and the TOC registry/rendering bounds.

use bookgen_core::{HeadingPolicy, DEFAULT_TOC_CAPACITY};
use serde::{Deserialize, Serialize};

/// Document behavior configuration.
///
/// Controls heading-level checking and table-of-contents limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentConfig {
    /// Heading level-jump policy.
    /// Default: Relaxed (jumps allowed, skipped counters stay zero)
    #[serde(default)]
    pub heading_policy: HeadingPolicy,

    /// Maximum number of headings the TOC registry accepts.
    /// Default: 100
    #[serde(default = "default_toc_capacity")]
    pub toc_capacity: usize,

    /// Deepest heading level rendered in the TOC (0 = all levels).
    /// Default: 0
    #[serde(default)]
    pub toc_depth: usize,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            heading_policy: HeadingPolicy::Relaxed,
            toc_capacity: DEFAULT_TOC_CAPACITY,
            toc_depth: 0,
        }
    }
}

impl DocumentConfig {
    /// Merge another DocumentConfig into this one.
    ///
    /// All fields are copied from `other`; override files carry only the
    /// keys the user wants to change and the rest parse as defaults.
    pub fn merge(&mut self, other: &DocumentConfig) {
        self.heading_policy = other.heading_policy;
        self.toc_capacity = other.toc_capacity;
        self.toc_depth = other.toc_depth;
    }
}

fn default_toc_capacity() -> usize {
    DEFAULT_TOC_CAPACITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let document = DocumentConfig::default();
        assert_eq!(document.heading_policy, HeadingPolicy::Relaxed);
        assert_eq!(document.toc_capacity, 100);
        assert_eq!(document.toc_depth, 0);
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r#"
            HeadingPolicy = "Strict"
            TocCapacity = 12
            TocDepth = 3
        "#;

        let document: DocumentConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(document.heading_policy, HeadingPolicy::Strict);
        assert_eq!(document.toc_capacity, 12);
        assert_eq!(document.toc_depth, 3);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let document: DocumentConfig = toml::from_str("TocCapacity = 7").unwrap();
        assert_eq!(document.heading_policy, HeadingPolicy::Relaxed);
        assert_eq!(document.toc_capacity, 7);
        assert_eq!(document.toc_depth, 0);
    }
}
