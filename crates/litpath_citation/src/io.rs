/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! Loading records and configuration from files.
//!
//! JSON is the backend's native shape; YAML is accepted for hand-written
//! fixtures and configuration. The format is chosen by file extension, and a
//! records file may hold either a list or a single record.

use std::fs;
use std::path::Path;

use litpath_core::{FormatterConfig, SourceRecord};

use crate::error::{CiteError, Result};

/// Load source records from a JSON or YAML file.
pub fn load_records(path: &Path) -> Result<Vec<SourceRecord>> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match ext {
        "yaml" | "yml" => {
            let content = String::from_utf8_lossy(&bytes);
            // Check for syntax errors first
            let _: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| parse_error("YAML", e.to_string()))?;

            if let Ok(records) = serde_yaml::from_str::<Vec<SourceRecord>>(&content) {
                return Ok(records);
            }
            match serde_yaml::from_str::<SourceRecord>(&content) {
                Ok(record) => Ok(vec![record]),
                Err(e) => Err(parse_error("YAML", e.to_string())),
            }
        }
        _ => {
            // Check for syntax errors first
            let _: serde_json::Value = serde_json::from_slice(&bytes)
                .map_err(|e| parse_error("JSON", e.to_string()))?;

            if let Ok(records) = serde_json::from_slice::<Vec<SourceRecord>>(&bytes) {
                return Ok(records);
            }
            match serde_json::from_slice::<SourceRecord>(&bytes) {
                Ok(record) => Ok(vec![record]),
                Err(e) => Err(parse_error("JSON", e.to_string())),
            }
        }
    }
}

/// Load a formatter configuration (word lists) from a JSON or YAML file.
/// Missing lists keep their embedded defaults.
pub fn load_config(path: &Path) -> Result<FormatterConfig> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match ext {
        "yaml" | "yml" => {
            let content = String::from_utf8_lossy(&bytes);
            serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string()))
        }
        _ => serde_json::from_slice(&bytes).map_err(|e| parse_error("JSON", e.to_string())),
    }
}

fn parse_error(format: &str, message: String) -> CiteError {
    CiteError::Parse {
        format: format.to_string(),
        message,
    }
}
