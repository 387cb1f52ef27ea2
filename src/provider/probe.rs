//! Host environment probing
//!
//! The resolver never inspects the host directly. Whoever embeds it supplies an
//! [`EnvironmentProbe`] answering whether each multilingual provider is
//! installed. [`CapabilityProbe`] answers from a set of named host symbols,
//! which is how a plugin host usually exposes its extensions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Symbol registered by the WPML-style string registry
pub const REGISTRY_SYMBOL: &str = "icl_register_string";

/// Translation callables of the qTranslate-style provider, newest first
pub const FUNCTION_TRANSLATE_SYMBOLS: [&str; 2] = [
    "qtranxf_useCurrentLanguageIfNotFoundUseDefaultLanguage",
    "qtrans_useCurrentLanguageIfNotFoundUseDefaultLanguage",
];

/// Language getters of the qTranslate-style provider, newest first
pub const FUNCTION_LANGUAGE_SYMBOLS: [&str; 2] = ["qtranxf_getLanguage", "qtrans_getLanguage"];

/// The multilingual providers the resolver knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// WPML-style: strings are registered under a context and looked up by name
    Registry,
    /// qTranslate-style: the literal text is passed through a host function
    Function,
}

impl ProviderKind {
    /// Resolution order. The first active provider wins.
    pub const PRIORITY: [ProviderKind; 2] = [ProviderKind::Registry, ProviderKind::Function];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Registry => "registry",
            ProviderKind::Function => "function",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers whether a multilingual provider is installed in the host.
///
/// A probe that cannot tell must answer `false`; absence and an unknowable
/// host are treated the same way.
pub trait EnvironmentProbe: Send + Sync {
    fn is_registry_provider_present(&self) -> bool;

    fn is_function_provider_present(&self) -> bool;

    fn is_present(&self, kind: ProviderKind) -> bool {
        match kind {
            ProviderKind::Registry => self.is_registry_provider_present(),
            ProviderKind::Function => self.is_function_provider_present(),
        }
    }
}

/// Probe backed by the set of symbol names the host has registered
#[derive(Debug, Clone, Default)]
pub struct CapabilityProbe {
    symbols: HashSet<String>,
}

impl CapabilityProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, name: &str) -> Self {
        self.symbols.insert(name.to_string());
        self
    }

    pub fn has_symbol(&self, name: &str) -> bool {
        self.symbols.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for CapabilityProbe {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl EnvironmentProbe for CapabilityProbe {
    fn is_registry_provider_present(&self) -> bool {
        self.has_symbol(REGISTRY_SYMBOL)
    }

    fn is_function_provider_present(&self) -> bool {
        FUNCTION_TRANSLATE_SYMBOLS
            .iter()
            .any(|name| self.has_symbol(name))
    }
}

/// Probe for hosts without any multilingual provider
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProviders;

impl EnvironmentProbe for NoProviders {
    fn is_registry_provider_present(&self) -> bool {
        false
    }

    fn is_function_provider_present(&self) -> bool {
        false
    }
}
