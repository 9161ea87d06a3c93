/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! Output format trait for pluggable renderers.

/// Trait for turning citation pieces into a specific output format.
///
/// Implementations define how raw text and emphasis (the italicized title)
/// are expressed. The style templates are written once against this trait
/// and rendered per format, so the plain rendition never carries markup and
/// the HTML rendition escapes every interpolated field.
pub trait OutputFormat: Default + Clone {
    /// Convert a raw string into the format's output, applying any
    /// character escaping the target format requires.
    fn text(&self, s: &str) -> String;

    /// Render content with emphasis (typically italics).
    fn emph(&self, content: String) -> String;

    /// Convert the assembled output into the final result string.
    fn finish(&self, output: String) -> String {
        output
    }
}
