//! Core data model for the LitPath citation formatter.
//!
//! This crate defines the record shape the formatter consumes
//! ([`SourceRecord`]), the supported citation styles, the result type, and
//! the word-list configuration that drives name parsing and title casing.
//! The formatting logic itself lives in `litpath_citation`.

pub mod config;
pub mod embedded;
pub mod source;
pub mod style;

pub use config::FormatterConfig;
pub use source::{SourceRecord, StringOrNumber};
pub use style::{CitationResult, CitationStyle, DegreeLevel};
