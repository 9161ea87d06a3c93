/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! Error types for record and configuration loading.
//!
//! The formatter itself is total and defines no errors; failures only occur
//! at the file boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CiteError {
    #[error("parse error ({format}): {message}")]
    Parse { format: String, message: String },

    #[error("unknown citation style: {0}")]
    UnknownStyle(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CiteError>;
