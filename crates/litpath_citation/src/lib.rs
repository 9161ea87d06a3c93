/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! LitPath Citation Formatter
//!
//! Turns a thesis/dissertation [`SourceRecord`](litpath_core::SourceRecord)
//! into a formatted citation in one of four styles (APA, MLA, Chicago, IEEE).
//! The formatter is pure and total: every input, including a missing record,
//! maps to a defined result, and no call retains state.
//!
//! # Example
//!
//! ```rust
//! use litpath_citation::generate_citation;
//! use litpath_core::{CitationStyle, SourceRecord, StringOrNumber};
//!
//! let record = SourceRecord {
//!     author: Some("DE LEON JUAN CARLOS".to_string()),
//!     year: Some(StringOrNumber::from(2022)),
//!     title: Some("a study of RICE YIELD in the philippines".to_string()),
//!     school: Some("UNIVERSITY OF THE PHILIPPINES LOS BANOS".to_string()),
//!     degree: Some("Master of Science".to_string()),
//! };
//!
//! let citation = generate_citation(Some(&record), CitationStyle::Apa);
//! assert_eq!(
//!     citation.plain,
//!     "De Leon, J. C. (2022). A study of rice yield in the Philippines \
//!      (Master's thesis, University of the Philippines Los Banos)."
//! );
//! assert!(citation.html.contains("<i>A study of rice yield in the Philippines</i>"));
//! ```

pub mod assemble;
pub mod casing;
pub mod degree;
pub mod error;
pub mod io;
pub mod name;
pub mod render;
pub mod styles;

pub use assemble::{generate_citation, Formatter};
pub use casing::{normalize_school, to_sentence_case, to_title_case};
pub use degree::{classify_degree, format_degree};
pub use error::CiteError;
pub use name::{parse_author_name, ParsedName};
pub use render::strip_tags;
pub use styles::parse_style;
