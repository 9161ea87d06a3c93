/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! Plain text output format. Used for the clipboard rendition; emphasis is
//! dropped and nothing is escaped.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    fn text(&self, s: &str) -> String {
        s.to_string()
    }

    fn emph(&self, content: String) -> String {
        content
    }
}
