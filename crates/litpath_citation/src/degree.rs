/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! Degree classification.
//!
//! The degree field is free text ("Master of Science in Agronomy",
//! "PhD in Chemistry", "MS Thesis"). Classification is substring matching
//! against three keyword sets, checked doctoral first. An unmatched string
//! classifies as doctoral; that is the production behavior and callers rely
//! on it, so it is kept rather than treated as an error.

use litpath_core::{CitationStyle, DegreeLevel};

const DOCTORAL_KEYWORDS: &[&str] = &[
    "doctor of",
    "doctoral",
    "phd",
    "ph.d.",
    "doctorate",
    "d.phil",
];

const MASTER_KEYWORDS: &[&str] = &["master", "m.s.", "m.sc", "ma"];

const BACHELOR_KEYWORDS: &[&str] = &["bachelor", "b.s.", "b.sc"];

fn matches_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Map a free-text degree string to a normalized level.
pub fn classify_degree(degree: &str) -> DegreeLevel {
    let lower = degree.to_lowercase();
    if matches_any(&lower, DOCTORAL_KEYWORDS) {
        DegreeLevel::Doctoral
    } else if matches_any(&lower, MASTER_KEYWORDS) {
        DegreeLevel::Masters
    } else if matches_any(&lower, BACHELOR_KEYWORDS) {
        DegreeLevel::Bachelors
    } else {
        DegreeLevel::Doctoral
    }
}

/// The style-specific label for a free-text degree string.
pub fn format_degree(degree: &str, style: CitationStyle) -> String {
    classify_degree(degree).label(style).to_string()
}
