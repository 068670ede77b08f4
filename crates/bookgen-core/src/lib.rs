//! Bookgen Core
//!
//! This crate provides the document state engine, core types, and error
//! definitions for the bookgen HTML emitter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`DocumentState`] - Indentation depth, chapter counters, and the TOC registry
//! - [`HeadingPolicy`], [`Theme`] - Policy and styling enums
//! - [`BookgenError`] - Error types
//! - [`TocEntry`] - One recorded heading, replayed when the TOC is rendered

pub mod error;
pub mod enums;
pub mod state;
pub mod types;

pub use error::{BookgenError, Result};
pub use enums::{HeadingPolicy, Theme};
pub use state::{DocumentState, DEFAULT_TOC_CAPACITY, HEADING_LEVELS};
pub use types::TocEntry;
