/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! Embedded default word lists.
//!
//! These are the lists the production formatter ships with. They can be
//! overridden wholesale by loading a [`crate::FormatterConfig`] from a file,
//! which is how tests and localized deployments swap them out.

/// Lowercase particles that attach to the following token(s) to form a
/// compound surname ("de la Cruz", "van der Meer").
pub const SURNAME_PREFIXES: &[&str] = &[
    "de", "del", "dela", "de la", "san", "santa", "van", "von", "da", "la",
];

/// Articles, conjunctions, and short prepositions kept lowercase in
/// title-cased output unless they open or close the title.
pub const MINOR_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "nor", "for", "so", "yet", "as", "at", "by", "in", "of",
    "off", "on", "per", "to", "up", "via",
];

/// Proper nouns restored to canonical capitalization after sentence-casing.
/// Mostly Philippine geography, since that is where LitPath records come from.
pub const PROPER_NOUNS: &[&str] = &[
    "Philippines",
    "Philippine",
    "Filipino",
    "Filipina",
    "Manila",
    "Luzon",
    "Visayas",
    "Mindanao",
    "Laguna",
    "Cavite",
    "Batangas",
    "Bulacan",
    "Pampanga",
    "Quezon",
    "Cebu",
    "Davao",
    "Iloilo",
    "Leyte",
    "Palawan",
    "Zamboanga",
    "Baguio",
    "Benguet",
    "Cagayan",
    "Bicol",
    "Tagalog",
    "Ilocano",
    "Cebuano",
];

/// Words forced to their canonical form in title-cased output even when they
/// would otherwise be left to the default word casing. Acronyms stay upper.
pub const PLACE_NAMES: &[&str] = &[
    "Philippines",
    "Manila",
    "Luzon",
    "Visayas",
    "Mindanao",
    "ASEAN",
    "UNESCO",
    "UPLB",
    "DOST",
    "CHED",
];

/// Words kept lowercase when an all-caps school name is re-cased.
pub const SCHOOL_LOWERCASE_WORDS: &[&str] = &["of", "the", "and", "in", "at", "for", "de"];
