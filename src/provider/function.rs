//! Function-based provider adapter (qTranslate-style)
//!
//! The provider exposes plain host functions: one that turns multilingual
//! text into the current language, and one that reports the current language.
//! Two generations of the provider exist and name these functions differently.
//! Each operation is therefore a [`CandidateChain`]: an ordered list of names,
//! newest first, of which the first registered one is used.

use crate::provider::adapter::{MultilingualAdapter, is_valid_language_code};
use crate::provider::language_tags::use_current_language;
use crate::provider::probe::{FUNCTION_LANGUAGE_SYMBOLS, FUNCTION_TRANSLATE_SYMBOLS, ProviderKind};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Host function translating multilingual text
pub type TranslateFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Host function reporting the current language
pub type LanguageFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Named host callables for one operation, tried in preference order
pub struct CandidateChain<F> {
    preference: Vec<String>,
    registered: HashMap<String, F>,
}

impl<F> CandidateChain<F> {
    pub fn new(preference: &[&str]) -> Self {
        Self {
            preference: preference.iter().map(|name| name.to_string()).collect(),
            registered: HashMap::new(),
        }
    }

    /// Make a callable available under `name`
    ///
    /// Names outside the preference list are kept but never selected.
    pub fn register(&mut self, name: &str, callable: F) -> &mut Self {
        if !self.preference.iter().any(|known| known == name) {
            debug!(%name, "Registered callable is not a known candidate");
        }
        self.registered.insert(name.to_string(), callable);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<F> {
        self.registered.remove(name)
    }

    /// The most preferred registered callable and its name
    pub fn first_present(&self) -> Option<(&str, &F)> {
        self.preference.iter().find_map(|name| {
            self.registered
                .get(name)
                .map(|callable| (name.as_str(), callable))
        })
    }
}

/// Adapter over qTranslate-style host functions
pub struct FunctionAdapter {
    translators: CandidateChain<TranslateFn>,
    language_getters: CandidateChain<LanguageFn>,
}

impl Default for FunctionAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionAdapter {
    /// An adapter with no host functions registered yet
    pub fn new() -> Self {
        Self {
            translators: CandidateChain::new(&FUNCTION_TRANSLATE_SYMBOLS),
            language_getters: CandidateChain::new(&FUNCTION_LANGUAGE_SYMBOLS),
        }
    }

    /// Adapter selecting blocks of language-tagged text, as the current
    /// generation of the provider does
    pub fn with_language_tags(current_language: &str, default_language: &str) -> Self {
        let current = current_language.to_string();
        let default = default_language.to_string();
        let language = current.clone();
        Self::new()
            .with_translator(
                FUNCTION_TRANSLATE_SYMBOLS[0],
                move |text: &str| use_current_language(text, &current, &default),
            )
            .with_language_getter(FUNCTION_LANGUAGE_SYMBOLS[0], move || language.clone())
    }

    pub fn with_translator(
        mut self,
        name: &str,
        translator: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.translators.register(name, Arc::new(translator));
        self
    }

    pub fn with_language_getter(
        mut self,
        name: &str,
        getter: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        self.language_getters.register(name, Arc::new(getter));
        self
    }

    pub fn translators(&self) -> &CandidateChain<TranslateFn> {
        &self.translators
    }

    pub fn language_getters(&self) -> &CandidateChain<LanguageFn> {
        &self.language_getters
    }
}

impl MultilingualAdapter for FunctionAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Function
    }

    fn provider_name(&self) -> &str {
        "qTranslate"
    }

    fn translate(&self, _key: &str, text: &str) -> String {
        match self.translators.first_present() {
            Some((name, translate)) => {
                debug!(function = name, "Translating through host function");
                translate(text)
            }
            None => {
                debug!("No translation function registered");
                String::new()
            }
        }
    }

    fn language_code(&self) -> String {
        let Some((name, get_language)) = self.language_getters.first_present() else {
            debug!("No language function registered");
            return String::new();
        };
        let code = get_language();
        if code.is_empty() || is_valid_language_code(&code) {
            code
        } else {
            warn!(function = name, %code, "Ignoring invalid language code");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEWER: &str = FUNCTION_TRANSLATE_SYMBOLS[0];
    const OLDER: &str = FUNCTION_TRANSLATE_SYMBOLS[1];

    #[test]
    fn test_chain_prefers_newer_name() {
        let mut chain: CandidateChain<&str> = CandidateChain::new(&[NEWER, OLDER]);
        chain.register(OLDER, "old").register(NEWER, "new");
        assert_eq!(chain.first_present(), Some((NEWER, &"new")));

        chain.remove(NEWER);
        assert_eq!(chain.first_present(), Some((OLDER, &"old")));
    }

    #[test]
    fn test_chain_ignores_unknown_names() {
        let mut chain: CandidateChain<u8> = CandidateChain::new(&[NEWER]);
        chain.register("something_else", 1);
        assert!(chain.first_present().is_none());
    }

    #[test]
    fn test_translate_with_both_generations_uses_newer() {
        let adapter = FunctionAdapter::new()
            .with_translator(OLDER, |text: &str| format!("old:{text}"))
            .with_translator(NEWER, |text: &str| format!("new:{text}"));
        assert_eq!(adapter.translate("search_label", "Search"), "new:Search");
    }

    #[test]
    fn test_translate_with_older_generation_only() {
        let adapter =
            FunctionAdapter::new().with_translator(OLDER, |text: &str| text.to_uppercase());
        assert_eq!(adapter.translate("search_label", "Search"), "SEARCH");
    }

    #[test]
    fn test_missing_functions_give_empty_results() {
        let adapter = FunctionAdapter::new();
        assert_eq!(adapter.translate("search_label", "Search"), "");
        assert_eq!(adapter.language_code(), "");
        assert_eq!(adapter.translate_entity("12"), "");
    }

    #[test]
    fn test_language_getter_preference() {
        let adapter = FunctionAdapter::new()
            .with_language_getter(FUNCTION_LANGUAGE_SYMBOLS[1], || "de".to_string())
            .with_language_getter(FUNCTION_LANGUAGE_SYMBOLS[0], || "fr".to_string());
        assert_eq!(adapter.language_code(), "fr");

        let adapter = FunctionAdapter::new()
            .with_language_getter(FUNCTION_LANGUAGE_SYMBOLS[1], || "de".to_string());
        assert_eq!(adapter.language_code(), "de");
    }

    #[test]
    fn test_invalid_language_code_is_dropped() {
        let adapter = FunctionAdapter::new()
            .with_language_getter(FUNCTION_LANGUAGE_SYMBOLS[0], || "fr fr".to_string());
        assert_eq!(adapter.language_code(), "");
    }

    #[test]
    fn test_language_tags_adapter() {
        let adapter = FunctionAdapter::with_language_tags("fr", "en");
        assert_eq!(
            adapter.translate("search_label", "[:en]Search[:fr]Rechercher[:]"),
            "Rechercher"
        );
        assert_eq!(adapter.translate("search_label", "Search"), "Search");
        assert_eq!(adapter.language_code(), "fr");
    }
}
