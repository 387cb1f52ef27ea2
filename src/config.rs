//! Resolver configuration
//!
//! `ResolverConfig` carries the knobs of the registry-based adapter and an
//! optional description of a simulated host. The host section lets the
//! command line tool, and tests, resolve texts without a real multilingual
//! provider installed.
//!
//! ```json
//! {
//!     "settings_group": "wpsl_settings",
//!     "return_original_entity_id": true,
//!     "host": {
//!         "capabilities": ["icl_register_string"],
//!         "language": "fr",
//!         "strings": { "fr": { "search_label": "Rechercher" } },
//!         "entities": { "fr": { "12": "48" } }
//!     }
//! }
//! ```

use crate::provider::{
    CapabilityProbe, FUNCTION_LANGUAGE_SYMBOLS, FUNCTION_TRANSLATE_SYMBOLS, FunctionAdapter,
    InMemoryRegistry, RegistryAdapter, string_context_for, string_name_for,
    use_current_language,
};
use crate::provider::{DEFAULT_ENTITY_TYPE, DEFAULT_SETTINGS_GROUP};
use crate::resolver::{ResolverContext, TranslationResolver};
use crate::settings::Settings;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Settings group texts are registered under with the registry provider
    pub settings_group: String,
    /// Entity type of store records
    pub entity_type: String,
    /// Use the original entity id when no translated copy exists
    pub return_original_entity_id: bool,
    pub host: HostConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            settings_group: DEFAULT_SETTINGS_GROUP.to_string(),
            entity_type: DEFAULT_ENTITY_TYPE.to_string(),
            return_original_entity_id: true,
            host: HostConfig::default(),
        }
    }
}

/// A simulated host environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Names of the host symbols that exist
    pub capabilities: Vec<String>,
    /// Language being served; the default language when unset
    pub language: Option<String>,
    pub default_language: String,
    /// Registered string translations: language -> setting key -> text
    pub strings: HashMap<String, HashMap<String, String>>,
    /// Translated entity ids: language -> original id -> translated id
    pub entities: HashMap<String, HashMap<String, String>>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            capabilities: Vec::new(),
            language: None,
            default_language: "en".to_string(),
            strings: HashMap::new(),
            entities: HashMap::new(),
        }
    }
}

impl HostConfig {
    pub fn current_language(&self) -> &str {
        self.language.as_deref().unwrap_or(&self.default_language)
    }

    pub fn has_capability(&self, name: &str) -> bool {
        self.capabilities.iter().any(|capability| capability == name)
    }
}

impl ResolverConfig {
    pub fn probe(&self) -> CapabilityProbe {
        self.host.capabilities.iter().cloned().collect()
    }

    /// Registry adapter backed by the host's registered strings and entities
    pub fn registry_adapter(&self) -> RegistryAdapter {
        let context = string_context_for(&self.settings_group);
        let mut registry = InMemoryRegistry::new(self.host.current_language());
        for (language, strings) in &self.host.strings {
            for (key, translation) in strings {
                registry.with_string(
                    language,
                    &context,
                    &string_name_for(&self.settings_group, key),
                    translation,
                );
            }
        }
        for (language, entities) in &self.host.entities {
            for (entity_id, translated_id) in entities {
                registry.with_entity(entity_id, &self.entity_type, language, translated_id);
            }
        }
        RegistryAdapter::new(registry)
            .with_settings_group(&self.settings_group)
            .with_entity_type(&self.entity_type)
            .with_return_original_entity_id(self.return_original_entity_id)
    }

    /// Function adapter with the host functions named in `capabilities`
    pub fn function_adapter(&self) -> FunctionAdapter {
        let current = self.host.current_language().to_string();
        let default = self.host.default_language.clone();
        let mut adapter = FunctionAdapter::new();
        for name in FUNCTION_TRANSLATE_SYMBOLS {
            if self.host.has_capability(name) {
                let (current, default) = (current.clone(), default.clone());
                adapter = adapter.with_translator(name, move |text: &str| {
                    use_current_language(text, &current, &default)
                });
            }
        }
        for name in FUNCTION_LANGUAGE_SYMBOLS {
            if self.host.has_capability(name) {
                let current = current.clone();
                adapter = adapter.with_language_getter(name, move || current.clone());
            }
        }
        adapter
    }

    /// A resolver over `settings` for the configured host
    pub fn build_resolver(&self, settings: Settings) -> TranslationResolver {
        TranslationResolver::new(ResolverContext::new(settings, self.probe()))
            .with_adapter(self.registry_adapter())
            .with_adapter(self.function_adapter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MultilingualAdapter, REGISTRY_SYMBOL};

    fn config_from(json: &str) -> ResolverConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = config_from("{}");
        assert_eq!(config, ResolverConfig::default());
        assert_eq!(config.settings_group, "wpsl_settings");
        assert_eq!(config.entity_type, "wpsl_stores");
        assert!(config.return_original_entity_id);
        assert_eq!(config.host.current_language(), "en");
    }

    #[test]
    fn test_registry_host() {
        let config = config_from(
            r#"{
                "host": {
                    "capabilities": ["icl_register_string"],
                    "language": "fr",
                    "strings": { "fr": { "tagline": "Bienvenue" } },
                    "entities": { "fr": { "12": "48" } }
                }
            }"#,
        );
        let adapter = config.registry_adapter();
        assert_eq!(adapter.translate("tagline", "Welcome"), "Bienvenue");
        assert_eq!(adapter.translate_entity("12"), "48");
        assert_eq!(adapter.language_code(), "fr");
    }

    #[test]
    fn test_custom_settings_group() {
        let config = config_from(
            r#"{
                "settings_group": "acme",
                "return_original_entity_id": false,
                "host": { "language": "nl", "strings": { "nl": { "tagline": "Welkom" } } }
            }"#,
        );
        let adapter = config.registry_adapter();
        assert_eq!(adapter.string_name("tagline"), "[acme]tagline");
        assert_eq!(adapter.translate("tagline", "Welcome"), "Welkom");
        assert_eq!(adapter.translate_entity("12"), "");
    }

    #[test]
    fn test_function_host_uses_only_listed_functions() {
        let config = config_from(
            r#"{
                "host": {
                    "capabilities": [
                        "qtrans_useCurrentLanguageIfNotFoundUseDefaultLanguage",
                        "qtrans_getLanguage"
                    ],
                    "language": "de"
                }
            }"#,
        );
        let adapter = config.function_adapter();
        assert_eq!(
            adapter.translators().first_present().map(|(name, _)| name),
            Some("qtrans_useCurrentLanguageIfNotFoundUseDefaultLanguage")
        );
        assert_eq!(adapter.translate("tagline", "[:en]Welcome[:de]Willkommen[:]"), "Willkommen");
        assert_eq!(adapter.language_code(), "de");
    }

    #[test]
    fn test_build_resolver() {
        let config = config_from(
            r#"{ "host": { "capabilities": ["icl_register_string"], "language": "fr",
                 "strings": { "fr": { "tagline": "Bienvenue" } } } }"#,
        );
        assert!(config.host.has_capability(REGISTRY_SYMBOL));

        let settings: Settings = [("tagline", "Welcome"), ("company_name", "Acme")]
            .into_iter()
            .collect();
        let resolver = config.build_resolver(settings);
        assert_eq!(resolver.get_translation("tagline", "Welcome"), "Bienvenue");
        assert_eq!(resolver.get_translation("company_name", "Acme"), "Acme");
        assert_eq!(resolver.get_language_suffix(), "_fr");
    }
}
