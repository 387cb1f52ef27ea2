//! Multilingual adapter trait and utilities
//!
//! This module defines the `MultilingualAdapter` trait, the seam between the
//! resolution policy and a concrete multilingual provider. Adapters never
//! fail: a missing provider, a lookup miss or a missing host callable all
//! produce an empty string, which the policy reads as "use the fallback".

use crate::provider::probe::ProviderKind;

/// Wrapper around one provider's translation capability
pub trait MultilingualAdapter: Send + Sync {
    /// The provider kind this adapter wraps
    fn kind(&self) -> ProviderKind;

    /// Name used in log output
    fn provider_name(&self) -> &str;

    /// Translate a settings text
    ///
    /// # Arguments
    ///
    /// * `key` - Setting name the text belongs to
    /// * `text` - The default text of the setting
    ///
    /// # Returns
    ///
    /// The translation, or an empty string when the provider has none
    fn translate(&self, key: &str, text: &str) -> String;

    /// Map an entity id to its counterpart in the active language
    ///
    /// Returns an empty string when no counterpart should be used. Providers
    /// without entity duplication keep this default.
    fn translate_entity(&self, entity_id: &str) -> String {
        let _ = entity_id;
        String::new()
    }

    /// Whether `translate_entity` is authoritative
    ///
    /// When `true`, an empty entity mapping means "no counterpart" and is
    /// passed on to the caller. Otherwise the original id is used.
    fn maps_entities(&self) -> bool {
        false
    }

    /// The active language code, or an empty string when unknown
    fn language_code(&self) -> String;
}

/// Check that a language code is usable as a settings key suffix
///
/// Only ASCII alphanumerics, hyphens and underscores are accepted, which
/// covers codes like `fr`, `pt-br` and `zh_CN`.
///
/// # Example
///
/// ```ignore
/// assert!(is_valid_language_code("pt-br"));
/// assert!(!is_valid_language_code("fr/../"));
/// ```
pub fn is_valid_language_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
