//! Policy and styling enums for bookgen.

use serde::{Deserialize, Serialize};

/// Controls whether a heading may skip levels.
///
/// Both behaviors exist among document generators of this family, so the
/// choice is explicit rather than baked in. Under [`HeadingPolicy::Relaxed`]
/// a level-3 heading directly after a level-1 heading is accepted and the
/// untouched level-2 counter stays at zero (number `2.0.1.`). Under
/// [`HeadingPolicy::Strict`] the same call is refused with
/// [`HeadingJump`](crate::BookgenError::HeadingJump).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingPolicy {
    /// Allow level jumps; intermediate counters render as zero
    #[default]
    Relaxed,
    /// Refuse a level whose immediate parent level is still unused
    Strict,
}

impl std::fmt::Display for HeadingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadingPolicy::Relaxed => write!(f, "relaxed"),
            HeadingPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Built-in stylesheet theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    /// Dark text on a white page
    #[default]
    Light,
    /// Light text on a near-black page
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_policy_display() {
        assert_eq!(HeadingPolicy::Relaxed.to_string(), "relaxed");
        assert_eq!(HeadingPolicy::Strict.to_string(), "strict");
    }

    #[test]
    fn test_heading_policy_default() {
        assert_eq!(HeadingPolicy::default(), HeadingPolicy::Relaxed);
    }

    #[test]
    fn test_theme_display() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
