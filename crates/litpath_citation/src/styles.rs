/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! Per-style citation templates.
//!
//! Each template consumes the normalized author/title/year/school/degree
//! tuple and builds the citation through an [`OutputFormat`], so the same
//! template produces both the HTML and plain renditions. Punctuation is
//! deliberately loose here; the assembler's cleanup pass collapses doubled
//! periods and stray comma-period sequences (that is what lets a bare
//! surname like "Madonna" render without an initials segment).

use litpath_core::CitationStyle;

use crate::casing::cap_word;
use crate::error::{CiteError, Result};
use crate::name::ParsedName;
use crate::render::OutputFormat;

/// Parse a style name arriving as free text (a query parameter or a config
/// value). Matching is case-insensitive; anything else is
/// [`CiteError::UnknownStyle`].
pub fn parse_style(s: &str) -> Result<CitationStyle> {
    s.parse()
        .map_err(|_| CiteError::UnknownStyle(s.trim().to_string()))
}

/// The normalized inputs a style template consumes.
pub(crate) struct StyleInput<'a> {
    pub name: &'a ParsedName,
    pub title: &'a str,
    pub year: &'a str,
    pub school: &'a str,
    pub degree: &'a str,
}

pub(crate) fn render_with<F: OutputFormat>(fmt: &F, style: CitationStyle, input: &StyleInput<'_>) -> String {
    let rendered = match style {
        CitationStyle::Apa => apa(fmt, input),
        CitationStyle::Mla => mla(fmt, input),
        CitationStyle::Chicago => chicago(fmt, input),
        CitationStyle::Ieee => ieee(fmt, input),
    };
    fmt.finish(rendered)
}

/// Surname group with each token re-cased: "DE LEON" renders as "De Leon".
fn family_display(name: &ParsedName) -> String {
    name.family
        .iter()
        .map(|t| cap_word(t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn given_display(name: &ParsedName) -> String {
    name.given
        .iter()
        .map(|t| cap_word(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// "JUAN CARLOS" renders as "J. C.".
fn initials(name: &ParsedName) -> String {
    name.given
        .iter()
        .filter_map(|t| t.chars().find(|c| c.is_alphabetic()))
        .map(|c| format!("{}.", c.to_ascii_uppercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// "Surname, F. M." (initials dropped when there are no given names).
fn author_surname_initials(name: &ParsedName) -> String {
    let family = family_display(name);
    let initials = initials(name);
    if initials.is_empty() {
        family
    } else {
        format!("{}, {}", family, initials)
    }
}

/// "Surname, Given Names".
fn author_surname_given(name: &ParsedName) -> String {
    let family = family_display(name);
    let given = given_display(name);
    if given.is_empty() {
        family
    } else {
        format!("{}, {}", family, given)
    }
}

/// "F. M. Surname".
fn author_initials_surname(name: &ParsedName) -> String {
    let family = family_display(name);
    let initials = initials(name);
    if initials.is_empty() {
        family
    } else {
        format!("{} {}", initials, family)
    }
}

fn apa<F: OutputFormat>(fmt: &F, input: &StyleInput<'_>) -> String {
    format!(
        "{}. ({}). {} ({}, {}).",
        fmt.text(&author_surname_initials(input.name)),
        fmt.text(input.year),
        fmt.emph(fmt.text(input.title)),
        fmt.text(input.degree),
        fmt.text(input.school),
    )
}

fn mla<F: OutputFormat>(fmt: &F, input: &StyleInput<'_>) -> String {
    format!(
        "{}. {}. {}, {}. {}.",
        fmt.text(&author_surname_given(input.name)),
        fmt.emph(fmt.text(input.title)),
        fmt.text(input.school),
        fmt.text(input.year),
        fmt.text(input.degree),
    )
}

fn chicago<F: OutputFormat>(fmt: &F, input: &StyleInput<'_>) -> String {
    format!(
        "{}. {}. {}, {}, {}.",
        fmt.text(&author_surname_given(input.name)),
        fmt.emph(fmt.text(input.title)),
        fmt.text(input.degree),
        fmt.text(input.school),
        fmt.text(input.year),
    )
}

fn ieee<F: OutputFormat>(fmt: &F, input: &StyleInput<'_>) -> String {
    format!(
        "{}, {}, {}, {}, Philippines, {}.",
        fmt.text(&author_initials_surname(input.name)),
        fmt.emph(fmt.text(input.title)),
        fmt.text(input.degree),
        fmt.text(input.school),
        fmt.text(input.year),
    )
}
