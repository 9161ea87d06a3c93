/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! Formatter configuration: the word lists that drive parsing and casing.
//!
//! The production UI embedded these as literals; here they are explicit data
//! so deployments can localize them without code changes.

use serde::{Deserialize, Serialize};

use crate::embedded;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case", default)]
pub struct FormatterConfig {
    /// Particles that fold into the surname group ("de", "van", ...).
    pub surname_prefixes: Vec<String>,
    /// Words kept lowercase mid-title in title case.
    pub minor_words: Vec<String>,
    /// Canonical capitalizations restored after sentence-casing.
    pub proper_nouns: Vec<String>,
    /// Canonical forms applied during title-casing (places, acronyms).
    pub place_names: Vec<String>,
    /// Words kept lowercase when re-casing an all-caps school name.
    pub school_lowercase_words: Vec<String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        fn owned(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        }

        FormatterConfig {
            surname_prefixes: owned(embedded::SURNAME_PREFIXES),
            minor_words: owned(embedded::MINOR_WORDS),
            proper_nouns: owned(embedded::PROPER_NOUNS),
            place_names: owned(embedded::PLACE_NAMES),
            school_lowercase_words: owned(embedded::SCHOOL_LOWERCASE_WORDS),
        }
    }
}

impl FormatterConfig {
    pub fn is_surname_prefix(&self, token: &str) -> bool {
        self.surname_prefixes
            .iter()
            .any(|p| p.eq_ignore_ascii_case(token))
    }

    pub fn is_minor_word(&self, word: &str) -> bool {
        self.minor_words.iter().any(|m| m.eq_ignore_ascii_case(word))
    }

    /// Canonical form of a proper noun, matched case-insensitively.
    pub fn proper_noun(&self, word: &str) -> Option<&str> {
        self.proper_nouns
            .iter()
            .find(|n| n.eq_ignore_ascii_case(word))
            .map(String::as_str)
    }

    /// Canonical form of a place name or acronym, matched case-insensitively.
    pub fn place_name(&self, word: &str) -> Option<&str> {
        self.place_names
            .iter()
            .find(|n| n.eq_ignore_ascii_case(word))
            .map(String::as_str)
    }

    pub fn is_school_lowercase_word(&self, word: &str) -> bool {
        self.school_lowercase_words
            .iter()
            .any(|m| m.eq_ignore_ascii_case(word))
    }
}
