//! Multilingual provider module
//!
//! This module holds everything the resolver knows about third-party
//! multilingual providers that may or may not be installed in the host.
//!
//! # Overview
//!
//! 1. **Probe** - Asks the host whether a provider is installed
//! 2. **Detector** - Remembers the first answer per provider kind
//! 3. **Adapters** - Wrap a provider's translation capability behind
//!    `MultilingualAdapter`: the registry-based (WPML-style) adapter and the
//!    function-based (qTranslate-style) adapter
//! 4. **Language tags** - Block selection for language-tagged text
//!
//! # Example
//!
//! ```ignore
//! use wpsl_i18n::provider::{CapabilityProbe, ProviderDetector, REGISTRY_SYMBOL};
//!
//! let probe = CapabilityProbe::new().with_symbol(REGISTRY_SYMBOL);
//! let detector = ProviderDetector::new(probe);
//! assert!(detector.is_registry_provider_active());
//! assert!(!detector.is_function_provider_active());
//! ```

pub mod adapter;
pub mod detector;
pub mod function;
pub mod language_tags;
pub mod mock;
pub mod probe;
pub mod registry;

pub use adapter::{MultilingualAdapter, is_valid_language_code};
pub use detector::{ProviderAvailability, ProviderDetector};
pub use function::{CandidateChain, FunctionAdapter, LanguageFn, TranslateFn};
pub use language_tags::{split_language_blocks, use_current_language};
pub use mock::MockProbe;
pub use probe::{
    CapabilityProbe, EnvironmentProbe, FUNCTION_LANGUAGE_SYMBOLS, FUNCTION_TRANSLATE_SYMBOLS,
    NoProviders, ProviderKind, REGISTRY_SYMBOL,
};
pub use registry::{
    DEFAULT_ENTITY_TYPE, DEFAULT_SETTINGS_GROUP, InMemoryRegistry, RegistryAdapter,
    StringRegistry, string_context_for, string_name_for,
};
