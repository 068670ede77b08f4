//! Document state for incremental HTML emission.
//!
//! The [`DocumentState`] struct maintains all state needed to emit one
//! document: the indentation depth, the chapter counters behind heading
//! numbers, and the TOC registry replayed at the end of the document.
//! One value is created per document; independent documents never share
//! state.

use crate::enums::HeadingPolicy;
use crate::error::{BookgenError, Result};
use crate::types::TocEntry;

/// Default capacity of the TOC registry.
pub const DEFAULT_TOC_CAPACITY: usize = 100;

/// Number of heading levels (h1 through h6).
pub const HEADING_LEVELS: usize = 6;

/// Per-document emission state.
///
/// Tracks three things:
/// - the current nesting depth, incremented by every structural open and
///   decremented by every close, which drives line indentation;
/// - one chapter counter per heading level, recombined into the dotted
///   chapter number on each heading call;
/// - the TOC registry, an append-only record of every heading emitted.
///
/// # Example
///
/// ```
/// use bookgen_core::{DocumentState, HeadingPolicy};
///
/// let mut state = DocumentState::new();
/// let n = state.record_heading(1, "Introduction", HeadingPolicy::Relaxed).unwrap();
/// assert_eq!(n, "1.");
/// let n = state.record_heading(2, "Scope", HeadingPolicy::Relaxed).unwrap();
/// assert_eq!(n, "1.1.");
/// ```
#[derive(Debug, Clone)]
pub struct DocumentState {
    // === Indentation tracker ===
    /// Current nesting depth; never negative
    depth: usize,

    // === Heading numbering ===
    /// Chapter counters for heading levels h1-h6
    chapter: [usize; HEADING_LEVELS],

    // === TOC registry ===
    /// Recorded headings in insertion order
    toc: Vec<TocEntry>,
    /// Maximum number of entries the registry accepts
    toc_capacity: usize,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentState {
    /// Create a fresh state with the default TOC capacity.
    pub fn new() -> Self {
        Self::with_toc_capacity(DEFAULT_TOC_CAPACITY)
    }

    /// Create a fresh state with an explicit TOC capacity.
    ///
    /// Documents with more than [`DEFAULT_TOC_CAPACITY`] headings need a
    /// larger registry; exceeding the capacity is a fatal
    /// [`TocCapacity`](BookgenError::TocCapacity) error, not a soft one.
    pub fn with_toc_capacity(toc_capacity: usize) -> Self {
        Self {
            depth: 0,
            chapter: [0; HEADING_LEVELS],
            toc: Vec::new(),
            toc_capacity,
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enter a structural element, deepening subsequent output by one level.
    ///
    /// The caller emits the opening line *before* calling this, so the tag
    /// itself sits at the parent's indentation.
    pub fn enter(&mut self) {
        self.depth += 1;
    }

    /// Leave a structural element.
    ///
    /// Runs *before* the closing line is emitted, so closers align with
    /// their openers. A call without a matching [`enter`](Self::enter)
    /// returns [`UnbalancedClose`](BookgenError::UnbalancedClose) and
    /// leaves the depth at zero, keeping all subsequent output valid.
    ///
    /// # Example
    ///
    /// ```
    /// use bookgen_core::DocumentState;
    ///
    /// let mut state = DocumentState::new();
    /// state.enter();
    /// assert_eq!(state.depth(), 1);
    /// state.exit().unwrap();
    /// assert_eq!(state.depth(), 0);
    /// assert!(state.exit().is_err());
    /// assert_eq!(state.depth(), 0);
    /// ```
    pub fn exit(&mut self) -> Result<()> {
        if self.depth == 0 {
            return Err(BookgenError::UnbalancedClose);
        }
        self.depth -= 1;
        Ok(())
    }

    /// Record a heading and return its formatted chapter number.
    ///
    /// Increments the counter for `level`, zeroes every deeper counter so
    /// numbering restarts inside each new parent section, formats the
    /// dot-terminated number (`[2,1,0,..]` at level 2 is `"2.1."`), and
    /// appends a [`TocEntry`] to the registry.
    ///
    /// The number is a pure function of the prior call sequence.
    ///
    /// # Errors
    ///
    /// All preconditions are checked before any mutation, so a failed call
    /// leaves counters and registry untouched:
    /// - [`InvalidHeadingLevel`](BookgenError::InvalidHeadingLevel) unless
    ///   `1 <= level <= 6`;
    /// - [`HeadingJump`](BookgenError::HeadingJump) under
    ///   [`HeadingPolicy::Strict`] when the parent level is still unused;
    /// - [`TocCapacity`](BookgenError::TocCapacity) when the registry is
    ///   full.
    pub fn record_heading(
        &mut self,
        level: usize,
        title: &str,
        policy: HeadingPolicy,
    ) -> Result<String> {
        if !(1..=HEADING_LEVELS).contains(&level) {
            return Err(BookgenError::InvalidHeadingLevel(level));
        }
        if policy == HeadingPolicy::Strict && level > 1 && self.chapter[level - 2] == 0 {
            return Err(BookgenError::HeadingJump {
                level,
                missing: level - 1,
            });
        }
        if self.toc.len() >= self.toc_capacity {
            return Err(BookgenError::TocCapacity(self.toc_capacity));
        }

        self.chapter[level - 1] += 1;
        for slot in self.chapter[level..].iter_mut() {
            *slot = 0;
        }

        let mut number = String::with_capacity(level * 2);
        for &count in &self.chapter[..level] {
            number.push_str(&count.to_string());
            number.push('.');
        }

        self.toc
            .push(TocEntry::new(number.clone(), level as u8, title));
        Ok(number)
    }

    /// All recorded headings, in insertion order.
    pub fn toc_entries(&self) -> &[TocEntry] {
        &self.toc
    }

    /// Number of recorded headings.
    pub fn toc_len(&self) -> usize {
        self.toc.len()
    }

    /// Configured registry capacity.
    pub fn toc_capacity(&self) -> usize {
        self.toc_capacity
    }
}
