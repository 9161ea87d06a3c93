/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! Citation assembly: normalization, style dispatch, punctuation cleanup.

use regex::Regex;

use litpath_core::{CitationResult, CitationStyle, FormatterConfig, SourceRecord};

use crate::casing::{normalize_school, to_sentence_case, to_title_case};
use crate::degree::format_degree;
use crate::name::parse_author_name;
use crate::render::{Html, OutputFormat, PlainText};
use crate::styles::{render_with, StyleInput};

/// Punctuation cleanup pass: collapse period runs, rewrite `,.` and `, .`
/// to `.`, collapse whitespace runs, trim. Applied to fixpoint so the pass
/// is idempotent on its own output.
struct Cleanup {
    comma_period: Regex,
    periods: Regex,
    spaces: Regex,
}

impl Default for Cleanup {
    fn default() -> Self {
        Cleanup {
            comma_period: Regex::new(r",\s*\.").unwrap(),
            periods: Regex::new(r"\.{2,}").unwrap(),
            spaces: Regex::new(r"\s+").unwrap(),
        }
    }
}

impl Cleanup {
    fn clean(&self, text: &str) -> String {
        let mut current = text.to_string();
        loop {
            let pass = self.comma_period.replace_all(&current, ".");
            let pass = self.periods.replace_all(&pass, ".");
            let pass = self.spaces.replace_all(&pass, " ");
            let next = pass.trim().to_string();
            if next == current {
                return next;
            }
            current = next;
        }
    }
}

/// The citation formatter: a word-list configuration plus the compiled
/// cleanup pass. Stateless between calls; `cite` can be invoked from any
/// thread with any record.
pub struct Formatter {
    config: FormatterConfig,
    cleanup: Cleanup,
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Formatter::with_config(FormatterConfig::default())
    }

    pub fn with_config(config: FormatterConfig) -> Self {
        Formatter {
            config,
            cleanup: Cleanup::default(),
        }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Format one record in the given style. A missing record produces an
    /// empty result rather than an error.
    pub fn cite(&self, source: Option<&SourceRecord>, style: CitationStyle) -> CitationResult {
        let Some(source) = source else {
            return CitationResult::default();
        };

        CitationResult {
            plain: self.render(&PlainText, source, style),
            html: self.render(&Html, source, style),
        }
    }

    pub fn cite_all(&self, sources: &[SourceRecord], style: CitationStyle) -> Vec<CitationResult> {
        sources.iter().map(|s| self.cite(Some(s), style)).collect()
    }

    /// Render one record through a caller-supplied output format.
    pub fn render<F: OutputFormat>(
        &self,
        fmt: &F,
        source: &SourceRecord,
        style: CitationStyle,
    ) -> String {
        let name = parse_author_name(source.author(), &self.config);
        let year = source.year();
        let school = normalize_school(source.school(), &self.config);
        let degree = format_degree(source.degree(), style);
        let title = match style {
            CitationStyle::Apa => to_sentence_case(source.title(), &self.config),
            _ => to_title_case(source.title(), &self.config),
        };

        self.cleanup.clean(&render_with(
            fmt,
            style,
            &StyleInput {
                name: &name,
                title: &title,
                year: &year,
                school: &school,
                degree: &degree,
            },
        ))
    }
}

/// Format a record with the embedded default word lists. Convenience wrapper
/// for callers that do not hold a [`Formatter`].
pub fn generate_citation(source: Option<&SourceRecord>, style: CitationStyle) -> CitationResult {
    Formatter::new().cite(source, style)
}
