//! Language-tagged text selection (qTranslate-style)
//!
//! A qTranslate-style provider stores every language of a text in a single
//! string, separated by language tags:
//!
//! - `[:en]Hello[:fr]Bonjour[:]`
//! - `{:en}Hello{:fr}Bonjour{:}`
//! - `<!--:en-->Hello<!--:--><!--:fr-->Bonjour<!--:-->`
//!
//! [`use_current_language`] picks the block of the current language, or of
//! the default language when the current one is missing. Text outside any
//! block belongs to every language.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static LANGUAGE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[:([A-Za-z_-]*)\]|\{:([A-Za-z_-]*)\}|<!--:([A-Za-z_-]*)-->")
        .expect("language tag pattern is valid")
});

/// Split language-tagged text into its per-language blocks
///
/// Returns `None` when the text carries no language tags.
pub fn split_language_blocks(text: &str) -> Option<HashMap<String, String>> {
    // (language, text) in reading order; `None` marks text outside any block
    let mut segments: Vec<(Option<String>, &str)> = Vec::new();
    let mut languages: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    let mut last_end = 0;

    for captures in LANGUAGE_TAG.captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        segments.push((current.clone(), &text[last_end..whole.start()]));

        let language = (1..=3)
            .filter_map(|group| captures.get(group))
            .map(|m| m.as_str().to_lowercase())
            .next()
            .unwrap_or_default();
        current = if language.is_empty() {
            None
        } else {
            if !languages.contains(&language) {
                languages.push(language.clone());
            }
            Some(language)
        };
        last_end = whole.end();
    }

    if segments.is_empty() {
        return None;
    }
    segments.push((current, &text[last_end..]));

    let blocks = languages
        .into_iter()
        .map(|language| {
            let block: String = segments
                .iter()
                .filter(|(owner, _)| owner.as_ref().is_none_or(|owner| *owner == language))
                .map(|(_, segment)| *segment)
                .collect();
            (language, block)
        })
        .collect();
    Some(blocks)
}

/// Select the text for `current`, falling back to `default`
///
/// Untagged text is returned unchanged. When neither language has a
/// non-empty block the result is empty.
///
/// # Example
///
/// ```ignore
/// let text = "[:en]Search[:fr]Rechercher[:]";
/// assert_eq!(use_current_language(text, "fr", "en"), "Rechercher");
/// assert_eq!(use_current_language(text, "de", "en"), "Search");
/// ```
pub fn use_current_language(text: &str, current: &str, default: &str) -> String {
    let Some(blocks) = split_language_blocks(text) else {
        return text.to_string();
    };
    [current, default]
        .iter()
        .filter_map(|language| blocks.get(&language.to_lowercase()))
        .find(|block| !block.is_empty())
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_text_passes_through() {
        assert_eq!(split_language_blocks("Search"), None);
        assert_eq!(use_current_language("Search", "fr", "en"), "Search");
        assert_eq!(use_current_language("", "fr", "en"), "");
    }

    #[test]
    fn test_square_bracket_tags() {
        let text = "[:en]Search[:fr]Rechercher[:]";
        assert_eq!(use_current_language(text, "fr", "en"), "Rechercher");
        assert_eq!(use_current_language(text, "en", "en"), "Search");
    }

    #[test]
    fn test_brace_tags() {
        let text = "{:en}Radius{:nl}Straal{:}";
        assert_eq!(use_current_language(text, "nl", "en"), "Straal");
    }

    #[test]
    fn test_comment_tags() {
        let text = "<!--:en-->Directions<!--:--><!--:de-->Route<!--:-->";
        assert_eq!(use_current_language(text, "de", "en"), "Route");
        assert_eq!(use_current_language(text, "en", "de"), "Directions");
    }

    #[test]
    fn test_falls_back_to_default_language() {
        let text = "[:en]Search[:fr]Rechercher[:]";
        assert_eq!(use_current_language(text, "es", "en"), "Search");
    }

    #[test]
    fn test_no_matching_language_is_empty() {
        let text = "[:en]Search[:fr]Rechercher[:]";
        assert_eq!(use_current_language(text, "es", "de"), "");
    }

    #[test]
    fn test_empty_current_block_uses_default() {
        let text = "[:en]Search[:fr][:]";
        assert_eq!(use_current_language(text, "fr", "en"), "Search");
    }

    #[test]
    fn test_text_outside_blocks_is_shared() {
        let blocks = split_language_blocks("[:en]Store[:fr]Magasin[:] #1").unwrap();
        assert_eq!(blocks["en"], "Store #1");
        assert_eq!(blocks["fr"], "Magasin #1");
    }

    #[test]
    fn test_leading_shared_text_keeps_its_place() {
        let blocks = split_language_blocks("Store: [:en]open[:fr]ouvert[:]").unwrap();
        assert_eq!(blocks["en"], "Store: open");
        assert_eq!(blocks["fr"], "Store: ouvert");
    }

    #[test]
    fn test_language_match_is_case_insensitive() {
        let text = "[:EN]Search[:FR]Rechercher[:]";
        assert_eq!(use_current_language(text, "fr", "en"), "Rechercher");
        assert_eq!(use_current_language(text, "FR", "en"), "Rechercher");
    }
}
