//! Mock environment probe for testing
//!
//! A switchable probe that counts how often each provider kind was probed.
//! Clones share state, so a test can keep a handle after moving one clone
//! into a detector.
//!
//! # Example
//!
//! ```ignore
//! use wpsl_i18n::provider::{MockProbe, ProviderDetector, ProviderKind};
//!
//! let probe = MockProbe::new(true, false);
//! let detector = ProviderDetector::new(probe.clone());
//! assert!(detector.is_registry_provider_active());
//! assert_eq!(probe.probe_count(ProviderKind::Registry), 1);
//! ```

use crate::provider::probe::{EnvironmentProbe, ProviderKind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Debug, Default)]
struct ProbeState {
    present: AtomicBool,
    probes: AtomicUsize,
}

/// Probe whose answers can be flipped at any time
#[derive(Debug, Clone, Default)]
pub struct MockProbe {
    registry: Arc<ProbeState>,
    function: Arc<ProbeState>,
}

impl MockProbe {
    pub fn new(registry_present: bool, function_present: bool) -> Self {
        let probe = Self::default();
        probe.set_present(ProviderKind::Registry, registry_present);
        probe.set_present(ProviderKind::Function, function_present);
        probe
    }

    fn state(&self, kind: ProviderKind) -> &ProbeState {
        match kind {
            ProviderKind::Registry => &self.registry,
            ProviderKind::Function => &self.function,
        }
    }

    /// Install or remove a provider from the simulated host
    pub fn set_present(&self, kind: ProviderKind, present: bool) {
        self.state(kind).present.store(present, Ordering::SeqCst);
    }

    /// Number of times the kind has been probed
    pub fn probe_count(&self, kind: ProviderKind) -> usize {
        self.state(kind).probes.load(Ordering::SeqCst)
    }

    fn probe(&self, kind: ProviderKind) -> bool {
        let state = self.state(kind);
        state.probes.fetch_add(1, Ordering::SeqCst);
        state.present.load(Ordering::SeqCst)
    }
}

impl EnvironmentProbe for MockProbe {
    fn is_registry_provider_present(&self) -> bool {
        self.probe(ProviderKind::Registry)
    }

    fn is_function_provider_present(&self) -> bool {
        self.probe(ProviderKind::Function)
    }
}
