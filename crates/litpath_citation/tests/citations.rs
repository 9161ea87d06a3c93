/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! End-to-end citation scenarios against real record shapes.

use litpath_citation::{generate_citation, io::load_records, strip_tags, Formatter};
use litpath_core::{CitationStyle, SourceRecord, StringOrNumber};
use std::path::PathBuf;

fn de_leon() -> SourceRecord {
    SourceRecord {
        author: Some("DE LEON JUAN CARLOS".to_string()),
        year: Some(StringOrNumber::from("2022")),
        title: Some("a study of RICE YIELD in the philippines".to_string()),
        school: Some("UNIVERSITY OF THE PHILIPPINES LOS BANOS".to_string()),
        degree: Some("Master of Science".to_string()),
    }
}

#[test]
fn apa_citation_matches_expected_output() {
    let result = generate_citation(Some(&de_leon()), CitationStyle::Apa);
    assert_eq!(
        result.plain,
        "De Leon, J. C. (2022). A study of rice yield in the Philippines \
         (Master's thesis, University of the Philippines Los Banos)."
    );
    assert_eq!(
        result.html,
        "De Leon, J. C. (2022). <i>A study of rice yield in the Philippines</i> \
         (Master's thesis, University of the Philippines Los Banos)."
    );
}

#[test]
fn mla_citation_matches_expected_output() {
    let result = generate_citation(Some(&de_leon()), CitationStyle::Mla);
    assert_eq!(
        result.plain,
        "De Leon, Juan Carlos. A Study of Rice Yield in the Philippines. \
         University of the Philippines Los Banos, 2022. Master's thesis."
    );
}

#[test]
fn chicago_citation_matches_expected_output() {
    let result = generate_citation(Some(&de_leon()), CitationStyle::Chicago);
    assert_eq!(
        result.plain,
        "De Leon, Juan Carlos. A Study of Rice Yield in the Philippines. \
         Master's thesis, University of the Philippines Los Banos, 2022."
    );
}

#[test]
fn ieee_citation_matches_expected_output() {
    let result = generate_citation(Some(&de_leon()), CitationStyle::Ieee);
    assert_eq!(
        result.plain,
        "J. C. De Leon, A Study of Rice Yield in the Philippines, M.S. thesis, \
         University of the Philippines Los Banos, Philippines, 2022."
    );
}

#[test]
fn single_word_author_renders_without_initials() {
    let record = SourceRecord {
        author: Some("Madonna".to_string()),
        year: Some(StringOrNumber::from(2021)),
        title: Some("URBAN FARMING IN MANILA".to_string()),
        school: Some("DE LA SALLE UNIVERSITY".to_string()),
        degree: None,
    };
    let result = generate_citation(Some(&record), CitationStyle::Apa);
    assert_eq!(
        result.plain,
        "Madonna. (2021). Urban farming in Manila \
         (Doctoral dissertation, De La Salle University)."
    );
}

#[test]
fn plain_rendition_equals_tag_stripped_html() {
    let formatter = Formatter::new();
    let records = load_records(
        &PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/records.json"),
    )
    .expect("records fixture should parse");

    for record in &records {
        for style in CitationStyle::ALL {
            let result = formatter.cite(Some(record), style);
            assert_eq!(result.plain, strip_tags(&result.html), "{:?}", style);
        }
    }
}

#[test]
fn every_style_renders_every_fixture_record() {
    let formatter = Formatter::new();
    let records = load_records(
        &PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/records.json"),
    )
    .expect("records fixture should parse");

    for style in CitationStyle::ALL {
        for result in formatter.cite_all(&records, style) {
            assert!(!result.is_empty());
            assert_eq!(result.html.matches("<i>").count(), 1);
            assert!(!result.plain.contains('<'));
            assert!(!result.plain.contains(".."));
            assert!(!result.plain.contains(",."));
        }
    }
}

#[test]
fn mixed_case_school_passes_through() {
    let record = SourceRecord {
        author: Some("Maria de la Cruz".to_string()),
        year: Some(StringOrNumber::from("2019")),
        title: Some("salt tolerance in mangrove seedlings: a field study".to_string()),
        school: Some("Ateneo de Manila University".to_string()),
        degree: Some("PhD in Marine Biology".to_string()),
    };
    let result = generate_citation(Some(&record), CitationStyle::Apa);
    assert_eq!(
        result.plain,
        "De La Cruz, M. (2019). Salt tolerance in mangrove seedlings: A field study \
         (Doctoral dissertation, Ateneo de Manila University)."
    );
}
