//! Store locator text resolution for multilingual sites
//!
//! Texts shown by the store locator (labels, messages, the tagline) are set
//! by the site admin. When a multilingual provider is installed the texts
//! are translated through it; otherwise the admin setting is used as is.
//!
//! ```ignore
//! use wpsl_i18n::{ResolverContext, Settings, TranslationResolver};
//! use wpsl_i18n::provider::{CapabilityProbe, InMemoryRegistry, RegistryAdapter, REGISTRY_SYMBOL};
//!
//! let settings: Settings = [("tagline", "Welcome")].into_iter().collect();
//! let probe = CapabilityProbe::new().with_symbol(REGISTRY_SYMBOL);
//! let mut registry = InMemoryRegistry::new("fr");
//! registry.with_string("fr", "admin_texts_wpsl_settings", "[wpsl_settings]tagline", "Bienvenue");
//!
//! let resolver = TranslationResolver::new(ResolverContext::new(settings, probe))
//!     .with_adapter(RegistryAdapter::new(registry));
//! assert_eq!(resolver.get_translation("tagline", "Welcome"), "Bienvenue");
//! assert_eq!(resolver.get_language_suffix(), "_fr");
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod provider;
pub mod resolver;
pub mod settings;


pub use config::{HostConfig, ResolverConfig};
pub use error::{LoadError, LoadResult};
pub use loader::{load_config_from_file, load_settings_from_file, parse_settings};
pub use provider::{EnvironmentProbe, MultilingualAdapter, ProviderKind};
pub use resolver::{ResolverContext, TranslationRequest, TranslationResolver};
pub use settings::{Settings, strip_slashes};
