//! Translation resolution policy
//!
//! Providers are consulted in a fixed order: the registry-based provider
//! first, then the function-based one. Only the first active provider is
//! asked; when it has nothing, the admin settings are used.

use crate::provider::{EnvironmentProbe, MultilingualAdapter, ProviderDetector, ProviderKind};
use crate::settings::Settings;
use tracing::{debug, warn};

/// State the resolver works on: the fallback settings and the memoized
/// provider detection
#[derive(Debug)]
pub struct ResolverContext {
    settings: Settings,
    detector: ProviderDetector,
}

impl ResolverContext {
    pub fn new(settings: Settings, probe: impl EnvironmentProbe + 'static) -> Self {
        Self {
            settings,
            detector: ProviderDetector::new(probe),
        }
    }

    pub fn with_detector(settings: Settings, detector: ProviderDetector) -> Self {
        Self { settings, detector }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn detector(&self) -> &ProviderDetector {
        &self.detector
    }
}

/// A single lookup, either of a settings text or of an entity id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub key: String,
    pub default_text: String,
    pub entity_id: Option<String>,
}

impl TranslationRequest {
    pub fn new(key: &str, default_text: &str) -> Self {
        Self {
            key: key.to_string(),
            default_text: default_text.to_string(),
            entity_id: None,
        }
    }

    pub fn for_entity(entity_id: &str) -> Self {
        Self {
            key: String::new(),
            default_text: String::new(),
            entity_id: Some(entity_id.to_string()),
        }
    }
}

/// Resolves settings texts, language suffixes and entity ids
pub struct TranslationResolver {
    context: ResolverContext,
    registry: Option<Box<dyn MultilingualAdapter>>,
    function: Option<Box<dyn MultilingualAdapter>>,
}

impl TranslationResolver {
    pub fn new(context: ResolverContext) -> Self {
        Self {
            context,
            registry: None,
            function: None,
        }
    }

    /// Install the adapter for the adapter's provider kind, replacing any
    /// earlier one of the same kind
    pub fn with_adapter(mut self, adapter: impl MultilingualAdapter + 'static) -> Self {
        self.set_adapter(Box::new(adapter));
        self
    }

    pub fn set_adapter(&mut self, adapter: Box<dyn MultilingualAdapter>) -> &mut Self {
        match adapter.kind() {
            ProviderKind::Registry => self.registry = Some(adapter),
            ProviderKind::Function => self.function = Some(adapter),
        }
        self
    }

    pub fn context(&self) -> &ResolverContext {
        &self.context
    }

    pub fn adapter(&self, kind: ProviderKind) -> Option<&dyn MultilingualAdapter> {
        match kind {
            ProviderKind::Registry => self.registry.as_deref(),
            ProviderKind::Function => self.function.as_deref(),
        }
    }

    pub fn is_registry_provider_active(&self) -> bool {
        self.context.detector.is_registry_provider_active()
    }

    pub fn is_function_provider_active(&self) -> bool {
        self.context.detector.is_function_provider_active()
    }

    /// The provider that handles lookups, if any
    ///
    /// Detection stops at the first active provider, so a lower-priority
    /// provider is not probed while a higher one is active.
    pub fn active_provider(&self) -> Option<ProviderKind> {
        ProviderKind::PRIORITY
            .into_iter()
            .find(|kind| self.context.detector.is_provider_active(*kind))
    }

    /// The adapter of the active provider
    ///
    /// An active provider without a configured adapter is logged and treated
    /// as if nothing were installed.
    fn active_adapter(&self, operation: &str) -> Option<&dyn MultilingualAdapter> {
        let kind = self.active_provider()?;
        let adapter = self.adapter(kind);
        if adapter.is_none() {
            warn!(provider = %kind, operation, "Provider is active but has no adapter");
        }
        adapter
    }

    /// Translate the settings text stored under `key`
    ///
    /// The active provider translates `default_text`; the registry-based one
    /// looks the text up by `key`. Without a provider translation the stored
    /// setting is returned with slashes stripped, or an empty string when the
    /// setting does not exist. `default_text` itself is never returned.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let settings: Settings = [("company_name", "Acme")].into_iter().collect();
    /// let resolver = TranslationResolver::new(ResolverContext::new(settings, NoProviders));
    /// assert_eq!(resolver.get_translation("company_name", "Acme"), "Acme");
    /// ```
    pub fn get_translation(&self, key: &str, default_text: &str) -> String {
        if let Some(adapter) = self.active_adapter("translate") {
            let translation = adapter.translate(key, default_text);
            if !translation.is_empty() {
                debug!(key, provider = adapter.provider_name(), "Resolved through provider");
                return translation;
            }
            debug!(key, provider = adapter.provider_name(), "Provider has no translation");
        }

        let settings = self.context.settings();
        if !settings.contains(key) {
            debug!(key, "Setting not found, returning empty translation");
        }
        settings.get_unslashed(key)
    }

    /// Suffix for per-language copies of a setting, e.g. `_fr`
    ///
    /// Empty when no provider is active or the language is unknown.
    pub fn get_language_suffix(&self) -> String {
        let code = self
            .active_adapter("language_suffix")
            .map(|adapter| adapter.language_code())
            .unwrap_or_default();
        if code.is_empty() {
            String::new()
        } else {
            format!("_{code}")
        }
    }

    /// The id of the entity's counterpart in the active language
    ///
    /// Without an entity-mapping provider the id is returned unchanged. A
    /// provider that maps entities may return an empty string, meaning the
    /// entity has no counterpart and the original should not be shown.
    pub fn get_translated_entity_id(&self, entity_id: &str) -> String {
        match self.active_adapter("translate_entity") {
            Some(adapter) if adapter.maps_entities() => adapter.translate_entity(entity_id),
            Some(adapter) => {
                let translated = adapter.translate_entity(entity_id);
                if translated.is_empty() {
                    entity_id.to_string()
                } else {
                    translated
                }
            }
            None => entity_id.to_string(),
        }
    }

    /// Settings key of the copy for the active language
    pub fn localized_key(&self, base: &str) -> String {
        format!("{}{}", base, self.get_language_suffix())
    }

    /// Setting for the active language, falling back to the base setting
    pub fn get_localized_setting(&self, base: &str) -> String {
        let key = self.localized_key(base);
        let settings = self.context.settings();
        if key != base && settings.contains(&key) {
            return settings.get_unslashed(&key);
        }
        settings.get_unslashed(base)
    }

    pub fn resolve(&self, request: &TranslationRequest) -> String {
        match &request.entity_id {
            Some(entity_id) => self.get_translated_entity_id(entity_id),
            None => self.get_translation(&request.key, &request.default_text),
        }
    }
}
