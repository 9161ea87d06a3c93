/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! HTML output format.
//!
//! Interpolated fields are escaped here. The original UI injected citation
//! HTML without sanitization; escaping at the source closes that hole
//! without changing output for ordinary metadata.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct Html;

impl OutputFormat for Html {
    fn text(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                _ => out.push(c),
            }
        }
        out
    }

    fn emph(&self, content: String) -> String {
        if content.is_empty() {
            return content;
        }
        format!("<i>{}</i>", content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        let html = Html;
        assert_eq!(html.text("salt & <script>"), "salt &amp; &lt;script&gt;");
    }

    #[test]
    fn emph_wraps_in_italics() {
        let html = Html;
        assert_eq!(html.emph("Title".to_string()), "<i>Title</i>");
        assert_eq!(html.emph(String::new()), "");
    }
}
