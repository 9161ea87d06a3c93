/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! Source records: the thesis/dissertation metadata the formatter consumes.
//!
//! Records are populated from backend search responses, so every field is
//! optional and the accessors substitute fixed fallback strings. The backend
//! uses `university` and `publication_year` for what the formatter calls
//! `school` and `year`; those are accepted as aliases on deserialization.

use serde::{Deserialize, Serialize};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNKNOWN_YEAR: &str = "n.d.";
pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_SCHOOL: &str = "Unknown Institution";
pub const DEFAULT_DEGREE: &str = "Thesis";

/// A value that may arrive as either a string or a number in JSON.
/// Publication years come back both ways depending on the backend index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum StringOrNumber {
    String(String),
    Number(i64),
}

impl From<i64> for StringOrNumber {
    fn from(n: i64) -> Self {
        StringOrNumber::Number(n)
    }
}

impl From<&str> for StringOrNumber {
    fn from(s: &str) -> Self {
        StringOrNumber::String(s.to_string())
    }
}

impl std::fmt::Display for StringOrNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StringOrNumber::String(s) => write!(f, "{}", s),
            StringOrNumber::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One thesis or dissertation record, as selected in the search UI or a
/// bookmark list. Passed by reference into the formatter; never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct SourceRecord {
    pub author: Option<String>,
    #[serde(alias = "publication_year")]
    pub year: Option<StringOrNumber>,
    pub title: Option<String>,
    #[serde(alias = "university")]
    pub school: Option<String>,
    pub degree: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl SourceRecord {
    pub fn author(&self) -> &str {
        non_empty(self.author.as_deref()).unwrap_or(UNKNOWN_AUTHOR)
    }

    pub fn year(&self) -> String {
        match &self.year {
            Some(StringOrNumber::Number(n)) => n.to_string(),
            Some(StringOrNumber::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => UNKNOWN_YEAR.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(UNTITLED)
    }

    pub fn school(&self) -> &str {
        non_empty(self.school.as_deref()).unwrap_or(UNKNOWN_SCHOOL)
    }

    pub fn degree(&self) -> &str {
        non_empty(self.degree.as_deref()).unwrap_or(DEFAULT_DEGREE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_field_names() {
        let json = r#"{
            "author": "DE LEON JUAN CARLOS",
            "publication_year": 2022,
            "title": "a study of rice yield",
            "university": "UNIVERSITY OF THE PHILIPPINES LOS BANOS",
            "degree": "Master of Science"
        }"#;

        let record: SourceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.year(), "2022");
        assert_eq!(record.school(), "UNIVERSITY OF THE PHILIPPINES LOS BANOS");
    }

    #[test]
    fn year_accepts_string_or_number() {
        let record: SourceRecord = serde_json::from_str(r#"{"year": "2019"}"#).unwrap();
        assert_eq!(record.year(), "2019");

        let record: SourceRecord = serde_json::from_str(r#"{"year": 2019}"#).unwrap();
        assert_eq!(record.year(), "2019");
    }

    #[test]
    fn missing_and_blank_fields_fall_back() {
        let record = SourceRecord::default();
        assert_eq!(record.author(), UNKNOWN_AUTHOR);
        assert_eq!(record.year(), UNKNOWN_YEAR);
        assert_eq!(record.title(), UNTITLED);
        assert_eq!(record.school(), UNKNOWN_SCHOOL);
        assert_eq!(record.degree(), DEFAULT_DEGREE);

        let record = SourceRecord {
            author: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(record.author(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn accessors_trim_whitespace() {
        let record = SourceRecord {
            title: Some("  A Study of Salt  ".to_string()),
            ..Default::default()
        };
        assert_eq!(record.title(), "A Study of Salt");
    }
}
