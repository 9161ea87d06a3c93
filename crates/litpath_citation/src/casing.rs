/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 LitPath AI
*/

//! Text casing transforms: sentence case, title case, and school-name
//! normalization. Pure string functions; ASCII case folding only.

use litpath_core::FormatterConfig;

/// Literal multi-word fixups applied after sentence-casing. These cannot be
/// expressed in the single-word proper-noun list.
const PHRASE_FIXUPS: &[&str] = &["Los Banos", "De La Salle"];

/// Uppercase the first alphabetic character of a word and lowercase the
/// rest, leaving digits and punctuation in place.
pub(crate) fn cap_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut seen_alpha = false;
    for c in word.chars() {
        if c.is_alphabetic() && !seen_alpha {
            out.push(c.to_ascii_uppercase());
            seen_alpha = true;
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

/// Sentence case: lowercase everything, capitalize sentence openers
/// (position 0, after `.`/`!`/`?`/`:` plus whitespace), restore proper nouns
/// to their canonical capitalization, and capitalize the first letter inside
/// `[...]` groups (scientific names).
pub fn to_sentence_case(text: &str, config: &FormatterConfig) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cap_next = true;
    let mut pending_break = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if cap_next {
                out.push(c.to_ascii_uppercase());
                cap_next = false;
            } else {
                out.push(c.to_ascii_lowercase());
            }
            pending_break = false;
        } else {
            out.push(c);
            if matches!(c, '.' | '!' | '?' | ':') {
                pending_break = true;
            } else if c.is_whitespace() {
                if pending_break {
                    cap_next = true;
                    pending_break = false;
                }
            } else {
                pending_break = false;
            }
        }
    }

    let out = restore_proper_nouns(&out, config);
    let out = apply_phrase_fixups(&out);
    capitalize_brackets(&out)
}

/// Title case: capitalize every word except minor words, which stay
/// lowercase unless they open or close the title. Place names and acronyms
/// take their canonical form regardless of position.
pub fn to_title_case(text: &str, config: &FormatterConfig) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let last = words.len().saturating_sub(1);

    words
        .iter()
        .enumerate()
        .map(|(i, word)| recase_title_word(word, i == 0 || i == last, config))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Re-case a school name that arrived entirely uppercase; anything with
/// existing lowercase is left untouched.
pub fn normalize_school(school: &str, config: &FormatterConfig) -> String {
    let has_alpha = school.chars().any(|c| c.is_alphabetic());
    let all_upper = has_alpha && !school.chars().any(|c| c.is_lowercase());
    if !all_upper {
        return school.to_string();
    }

    school
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if i > 0 && config.is_school_lowercase_word(word) {
                word.to_ascii_lowercase()
            } else {
                cap_word(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn recase_title_word(word: &str, edge: bool, config: &FormatterConfig) -> String {
    let start = match word.char_indices().find(|(_, c)| c.is_alphanumeric()) {
        Some((i, _)) => i,
        None => return word.to_string(),
    };
    let end = word
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(word.len());

    let core = &word[start..end];
    let recased = if let Some(canonical) = config.place_name(core) {
        canonical.to_string()
    } else if !edge && config.is_minor_word(core) {
        core.to_ascii_lowercase()
    } else {
        cap_word(core)
    };

    format!("{}{}{}", &word[..start], recased, &word[end..])
}

fn restore_proper_nouns(text: &str, config: &FormatterConfig) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();

    let flush = |word: &mut String, out: &mut String| {
        if !word.is_empty() {
            // match the stem so possessives ("philippines'") still restore
            let stem = word.trim_end_matches('\'');
            match config.proper_noun(stem) {
                Some(canonical) => {
                    out.push_str(canonical);
                    out.push_str(&word[stem.len()..]);
                }
                None => out.push_str(word),
            }
            word.clear();
        }
    };

    for c in text.chars() {
        if c.is_alphanumeric() || c == '\'' {
            word.push(c);
        } else {
            flush(&mut word, &mut out);
            out.push(c);
        }
    }
    flush(&mut word, &mut out);
    out
}

fn apply_phrase_fixups(text: &str) -> String {
    let mut out = text.to_string();
    for phrase in PHRASE_FIXUPS {
        out = replace_phrase_ci(&out, phrase);
    }
    out
}

/// Replace every case-insensitive occurrence of `canonical` with its
/// canonical spelling. The phrases are ASCII, so byte offsets found in the
/// lowercased haystack are valid in the original.
fn replace_phrase_ci(text: &str, canonical: &str) -> String {
    let needle = canonical.to_ascii_lowercase();
    let haystack = text.to_ascii_lowercase();

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(found) = haystack[pos..].find(&needle) {
        let at = pos + found;
        out.push_str(&text[pos..at]);
        out.push_str(canonical);
        pos = at + needle.len();
    }
    out.push_str(&text[pos..]);
    out
}

fn capitalize_brackets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_bracket = false;
    let mut capitalized = false;

    for c in text.chars() {
        match c {
            '[' => {
                in_bracket = true;
                capitalized = false;
                out.push(c);
            }
            ']' => {
                in_bracket = false;
                out.push(c);
            }
            _ if in_bracket && !capitalized && c.is_alphabetic() => {
                out.push(c.to_ascii_uppercase());
                capitalized = true;
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FormatterConfig {
        FormatterConfig::default()
    }

    #[test]
    fn sentence_case_lowercases_and_capitalizes_openers() {
        assert_eq!(
            to_sentence_case("THE GROWTH of PLANTS. a field STUDY", &config()),
            "The growth of plants. A field study"
        );
        assert_eq!(
            to_sentence_case("salt tolerance: a review", &config()),
            "Salt tolerance: A review"
        );
    }

    #[test]
    fn sentence_case_restores_proper_nouns() {
        assert_eq!(
            to_sentence_case("a study of RICE YIELD in the philippines", &config()),
            "A study of rice yield in the Philippines"
        );
        assert_eq!(
            to_sentence_case("FARMING IN CEBU AND DAVAO", &config()),
            "Farming in Cebu and Davao"
        );
    }

    #[test]
    fn sentence_case_restores_possessive_proper_nouns() {
        assert_eq!(
            to_sentence_case("the philippines' rice economy", &config()),
            "The Philippines' rice economy"
        );
    }

    #[test]
    fn sentence_case_applies_phrase_fixups() {
        assert_eq!(
            to_sentence_case("los banos field trials", &config()),
            "Los Banos field trials"
        );
    }

    #[test]
    fn sentence_case_capitalizes_bracket_groups() {
        assert_eq!(
            to_sentence_case("growth of rice [oryza sativa] under stress", &config()),
            "Growth of rice [Oryza sativa] under stress"
        );
    }

    #[test]
    fn sentence_case_ignores_decimal_points() {
        assert_eq!(
            to_sentence_case("effects at 3.5 mg doses", &config()),
            "Effects at 3.5 mg doses"
        );
    }

    #[test]
    fn title_case_keeps_minor_words_lowercase() {
        assert_eq!(
            to_title_case("the effects of salt on plant growth", &config()),
            "The Effects of Salt on Plant Growth"
        );
    }

    #[test]
    fn title_case_forces_edge_words_up() {
        // "of" is minor but closes the title
        assert_eq!(to_title_case("the science of", &config()), "The Science Of");
    }

    #[test]
    fn title_case_recases_all_caps_input() {
        assert_eq!(
            to_title_case("A STUDY OF RICE YIELD IN THE PHILIPPINES", &config()),
            "A Study of Rice Yield in the Philippines"
        );
    }

    #[test]
    fn title_case_preserves_acronym_place_names() {
        assert_eq!(
            to_title_case("rice policy under asean agreements", &config()),
            "Rice Policy Under ASEAN Agreements"
        );
    }

    #[test]
    fn school_normalization_only_touches_all_caps() {
        assert_eq!(
            normalize_school("UNIVERSITY OF THE PHILIPPINES LOS BANOS", &config()),
            "University of the Philippines Los Banos"
        );
        assert_eq!(
            normalize_school("Ateneo de Manila University", &config()),
            "Ateneo de Manila University"
        );
        assert_eq!(
            normalize_school("MAPUA INSTITUTE OF TECHNOLOGY", &config()),
            "Mapua Institute of Technology"
        );
    }

    #[test]
    fn school_normalization_capitalizes_leading_exception_word() {
        assert_eq!(
            normalize_school("THE NATIONAL TEACHERS COLLEGE", &config()),
            "The National Teachers College"
        );
    }
}
