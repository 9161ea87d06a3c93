/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! Citation styles, degree levels, and the formatter's result type.

use serde::{Deserialize, Serialize};

/// The citation styles offered in the UI's style picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum CitationStyle {
    Apa,
    Mla,
    Chicago,
    Ieee,
}

impl CitationStyle {
    pub const ALL: [CitationStyle; 4] = [
        CitationStyle::Apa,
        CitationStyle::Mla,
        CitationStyle::Chicago,
        CitationStyle::Ieee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CitationStyle::Apa => "APA",
            CitationStyle::Mla => "MLA",
            CitationStyle::Chicago => "Chicago",
            CitationStyle::Ieee => "IEEE",
        }
    }
}

impl std::fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for CitationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apa" => Ok(CitationStyle::Apa),
            "mla" => Ok(CitationStyle::Mla),
            "chicago" => Ok(CitationStyle::Chicago),
            "ieee" => Ok(CitationStyle::Ieee),
            _ => Err(format!("unknown citation style: {}", s)),
        }
    }
}

/// Normalized degree level, derived from the free-text degree field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum DegreeLevel {
    Doctoral,
    Masters,
    Bachelors,
}

impl DegreeLevel {
    /// The label used in a formatted citation. IEEE abbreviates; the other
    /// styles spell the degree out.
    pub fn label(self, style: CitationStyle) -> &'static str {
        match (style, self) {
            (CitationStyle::Ieee, DegreeLevel::Doctoral) => "Ph.D. dissertation",
            (CitationStyle::Ieee, DegreeLevel::Masters) => "M.S. thesis",
            (CitationStyle::Ieee, DegreeLevel::Bachelors) => "B.S. thesis",
            (_, DegreeLevel::Doctoral) => "Doctoral dissertation",
            (_, DegreeLevel::Masters) => "Master's thesis",
            (_, DegreeLevel::Bachelors) => "Bachelor's thesis",
        }
    }
}

/// A formatted citation in both renditions the UI needs: `html` for the
/// modal dialog, `plain` for the clipboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CitationResult {
    pub plain: String,
    pub html: String,
}

impl CitationResult {
    pub fn is_empty(&self) -> bool {
        self.plain.is_empty() && self.html.is_empty()
    }
}
