//! Error types for bookgen

use thiserror::Error;

/// Main error type for bookgen operations
#[derive(Error, Debug)]
pub enum BookgenError {
    /// IO error while writing to the sink or reading an asset
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Heading level outside the supported 1-6 range
    #[error("heading level {0} is out of range 1-6")]
    InvalidHeadingLevel(usize),

    /// Under the strict policy, a heading used a level whose parent level
    /// has not been used yet
    #[error("heading level {level} used before any level {missing} heading")]
    HeadingJump {
        /// The level the caller asked for
        level: usize,
        /// The parent level that is still unused
        missing: usize,
    },

    /// The TOC registry reached its configured capacity
    #[error("table of contents is full ({0} entries); raise TocCapacity")]
    TocCapacity(usize),

    /// A close operation had no matching prior open
    #[error("close without a matching open")]
    UnbalancedClose,
}

/// Result type alias for bookgen operations
pub type Result<T> = std::result::Result<T, BookgenError>;
