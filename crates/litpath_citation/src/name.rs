/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! Author name parsing.
//!
//! Records arrive in two shapes: the Philippine library convention
//! "SURNAME GIVEN-NAMES" (often all caps, sometimes with a comma), and the
//! western "Given Names Surname". Surname prefixes disambiguate the first
//! shape: a record that opens with "de"/"dela"/"van"/... is surname-first.

use litpath_core::FormatterConfig;

/// A raw author name split into given-name tokens and a surname group.
/// Derived per formatting call; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedName {
    pub given: Vec<String>,
    pub family: Vec<String>,
}

impl ParsedName {
    pub fn is_empty(&self) -> bool {
        self.given.is_empty() && self.family.is_empty()
    }
}

/// Split a raw author name into given names and a surname group.
///
/// The surname group always contains at least the final token of a non-empty
/// name, and `given.len() + family.len()` equals the token count.
pub fn parse_author_name(name: &str, config: &FormatterConfig) -> ParsedName {
    // Commas separate but carry no information here.
    let cleaned = name.replace(',', " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let owned = |slice: &[&str]| slice.iter().map(|t| t.to_string()).collect::<Vec<_>>();

    match tokens.len() {
        0 => ParsedName::default(),
        1 => ParsedName {
            given: Vec::new(),
            family: owned(&tokens),
        },
        _ if config.is_surname_prefix(tokens[0]) => {
            // Surname-first record: the leading prefix run plus the next
            // token form the surname.
            let mut split = 0;
            while split < tokens.len() - 1 && config.is_surname_prefix(tokens[split]) {
                split += 1;
            }
            ParsedName {
                given: owned(&tokens[split + 1..]),
                family: owned(&tokens[..=split]),
            }
        }
        _ => {
            // Given-first: pull prefixes into the surname group, scanning
            // backward from the second-to-last token.
            let mut split = tokens.len() - 1;
            while split > 0 && config.is_surname_prefix(tokens[split - 1]) {
                split -= 1;
            }
            ParsedName {
                given: owned(&tokens[..split]),
                family: owned(&tokens[split..]),
            }
        }
    }
}
