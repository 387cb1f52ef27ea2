//! Registry-based provider adapter (WPML-style)
//!
//! Settings texts are registered with the provider under a string context and
//! a name, and translated per language through the provider's admin screens.
//! Entities such as stores are duplicated per language; the provider maps an
//! original id to the id of its translated copy.

use crate::provider::adapter::{MultilingualAdapter, is_valid_language_code};
use crate::provider::probe::ProviderKind;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Default settings group the plugin registers its texts under
pub const DEFAULT_SETTINGS_GROUP: &str = "wpsl_settings";

/// Default entity type of store records
pub const DEFAULT_ENTITY_TYPE: &str = "wpsl_stores";

/// String context settings texts of `group` are registered under
pub fn string_context_for(group: &str) -> String {
    format!("admin_texts_{group}")
}

/// Registered name of setting `key` in `group`, e.g. `[wpsl_settings]search_label`
pub fn string_name_for(group: &str, key: &str) -> String {
    format!("[{group}]{key}")
}

/// Host access to a WPML-style string registry
pub trait StringRegistry: Send + Sync {
    /// Translation registered under `context`/`name` for the current language
    fn registered_translation(&self, context: &str, name: &str) -> Option<String>;

    /// Id of the entity's counterpart in `language`
    ///
    /// With `return_original` set, the original id is returned when no
    /// counterpart exists; otherwise `None`.
    fn translated_entity_id(
        &self,
        entity_id: &str,
        entity_type: &str,
        language: &str,
        return_original: bool,
    ) -> Option<String>;

    /// The language the host is currently serving
    fn current_language(&self) -> Option<String>;
}

/// A string registry kept in memory
///
/// Used by the command line tool and by tests to stand in for a real host.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    language: Option<String>,
    // (language, context, name) -> translation
    strings: HashMap<(String, String, String), String>,
    // (entity id, entity type, language) -> translated id
    entities: HashMap<(String, String, String), String>,
}

impl InMemoryRegistry {
    pub fn new(language: &str) -> Self {
        Self {
            language: Some(language.to_string()),
            ..Self::default()
        }
    }

    pub fn with_language(&mut self, language: &str) -> &mut Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn with_string(
        &mut self,
        language: &str,
        context: &str,
        name: &str,
        translation: &str,
    ) -> &mut Self {
        self.strings.insert(
            (language.to_string(), context.to_string(), name.to_string()),
            translation.to_string(),
        );
        self
    }

    pub fn with_entity(
        &mut self,
        entity_id: &str,
        entity_type: &str,
        language: &str,
        translated_id: &str,
    ) -> &mut Self {
        self.entities.insert(
            (
                entity_id.to_string(),
                entity_type.to_string(),
                language.to_string(),
            ),
            translated_id.to_string(),
        );
        self
    }
}

impl StringRegistry for InMemoryRegistry {
    fn registered_translation(&self, context: &str, name: &str) -> Option<String> {
        let language = self.language.clone()?;
        self.strings
            .get(&(language, context.to_string(), name.to_string()))
            .cloned()
    }

    fn translated_entity_id(
        &self,
        entity_id: &str,
        entity_type: &str,
        language: &str,
        return_original: bool,
    ) -> Option<String> {
        let key = (
            entity_id.to_string(),
            entity_type.to_string(),
            language.to_string(),
        );
        match self.entities.get(&key) {
            Some(translated) => Some(translated.clone()),
            None if return_original => Some(entity_id.to_string()),
            None => None,
        }
    }

    fn current_language(&self) -> Option<String> {
        self.language.clone()
    }
}

/// Adapter over a [`StringRegistry`]
pub struct RegistryAdapter {
    registry: Box<dyn StringRegistry>,
    settings_group: String,
    entity_type: String,
    return_original_entity_id: bool,
}

impl RegistryAdapter {
    pub fn new(registry: impl StringRegistry + 'static) -> Self {
        Self {
            registry: Box::new(registry),
            settings_group: DEFAULT_SETTINGS_GROUP.to_string(),
            entity_type: DEFAULT_ENTITY_TYPE.to_string(),
            return_original_entity_id: true,
        }
    }

    pub fn with_settings_group(mut self, group: &str) -> Self {
        self.settings_group = group.to_string();
        self
    }

    pub fn with_entity_type(mut self, entity_type: &str) -> Self {
        self.entity_type = entity_type.to_string();
        self
    }

    /// Whether the original id is used when an entity has no translated copy
    pub fn with_return_original_entity_id(mut self, return_original: bool) -> Self {
        self.return_original_entity_id = return_original;
        self
    }

    pub fn string_context(&self) -> String {
        string_context_for(&self.settings_group)
    }

    pub fn string_name(&self, key: &str) -> String {
        string_name_for(&self.settings_group, key)
    }
}

impl MultilingualAdapter for RegistryAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Registry
    }

    fn provider_name(&self) -> &str {
        "WPML"
    }

    fn translate(&self, key: &str, _text: &str) -> String {
        let context = self.string_context();
        let name = self.string_name(key);
        match self.registry.registered_translation(&context, &name) {
            Some(translation) => translation,
            None => {
                debug!(%context, %name, "No registered translation");
                String::new()
            }
        }
    }

    fn translate_entity(&self, entity_id: &str) -> String {
        let language = self.language_code();
        self.registry
            .translated_entity_id(
                entity_id,
                &self.entity_type,
                &language,
                self.return_original_entity_id,
            )
            .unwrap_or_default()
    }

    fn maps_entities(&self) -> bool {
        true
    }

    fn language_code(&self) -> String {
        match self.registry.current_language() {
            Some(code) if is_valid_language_code(&code) => code,
            Some(code) => {
                warn!(%code, "Ignoring invalid language code from registry");
                String::new()
            }
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn french_registry() -> InMemoryRegistry {
        let mut registry = InMemoryRegistry::new("fr");
        registry
            .with_string(
                "fr",
                "admin_texts_wpsl_settings",
                "[wpsl_settings]tagline",
                "Bienvenue",
            )
            .with_string(
                "de",
                "admin_texts_wpsl_settings",
                "[wpsl_settings]tagline",
                "Willkommen",
            )
            .with_entity("12", "wpsl_stores", "fr", "48");
        registry
    }

    #[test]
    fn test_composite_string_key() {
        let adapter = RegistryAdapter::new(InMemoryRegistry::default());
        assert_eq!(adapter.string_context(), "admin_texts_wpsl_settings");
        assert_eq!(adapter.string_name("tagline"), "[wpsl_settings]tagline");

        let adapter = adapter.with_settings_group("acme");
        assert_eq!(adapter.string_context(), "admin_texts_acme");
        assert_eq!(adapter.string_name("tagline"), "[acme]tagline");
    }

    #[test]
    fn test_translate_uses_current_language() {
        let adapter = RegistryAdapter::new(french_registry());
        assert_eq!(adapter.translate("tagline", "Welcome"), "Bienvenue");
    }

    #[test]
    fn test_translate_miss_is_empty() {
        let adapter = RegistryAdapter::new(french_registry());
        assert_eq!(adapter.translate("start_label", "Start"), "");

        let adapter = RegistryAdapter::new(french_registry()).with_settings_group("other");
        assert_eq!(adapter.translate("tagline", "Welcome"), "");
    }

    #[test]
    fn test_translate_without_language_is_empty() {
        let mut registry = french_registry();
        registry.language = None;
        let adapter = RegistryAdapter::new(registry);
        assert_eq!(adapter.translate("tagline", "Welcome"), "");
        assert_eq!(adapter.language_code(), "");
    }

    #[test]
    fn test_translate_entity() {
        let adapter = RegistryAdapter::new(french_registry());
        assert_eq!(adapter.translate_entity("12"), "48");
        assert_eq!(adapter.translate_entity("13"), "13");
    }

    #[test]
    fn test_translate_entity_without_original() {
        let adapter =
            RegistryAdapter::new(french_registry()).with_return_original_entity_id(false);
        assert_eq!(adapter.translate_entity("12"), "48");
        assert_eq!(adapter.translate_entity("13"), "");
    }

    #[test]
    fn test_translate_entity_respects_entity_type() {
        let adapter = RegistryAdapter::new(french_registry()).with_entity_type("page");
        assert_eq!(adapter.translate_entity("12"), "12");
    }

    #[test]
    fn test_invalid_language_code_is_dropped() {
        let adapter = RegistryAdapter::new(InMemoryRegistry::new("fr/../"));
        assert_eq!(adapter.language_code(), "");
        let adapter = RegistryAdapter::new(InMemoryRegistry::new("pt-br"));
        assert_eq!(adapter.language_code(), "pt-br");
    }
}
