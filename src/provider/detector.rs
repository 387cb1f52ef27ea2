//! Memoized provider detection
//!
//! Probing the host is done at most once per provider kind. The first answer
//! is kept for the lifetime of the detector even if the host changes later.

use crate::provider::probe::{EnvironmentProbe, ProviderKind};
use std::sync::OnceLock;
use tracing::debug;

/// Write-once presence flags, one per provider kind
#[derive(Debug, Default)]
pub struct ProviderAvailability {
    registry: OnceLock<bool>,
    function: OnceLock<bool>,
}

impl ProviderAvailability {
    pub fn new() -> Self {
        Self::default()
    }

    fn cell(&self, kind: ProviderKind) -> &OnceLock<bool> {
        match kind {
            ProviderKind::Registry => &self.registry,
            ProviderKind::Function => &self.function,
        }
    }

    /// The cached answer, if the kind has been probed already
    pub fn get(&self, kind: ProviderKind) -> Option<bool> {
        self.cell(kind).get().copied()
    }

    /// Return the cached answer or compute and store it
    pub fn get_or_probe(&self, kind: ProviderKind, probe: impl FnOnce() -> bool) -> bool {
        *self.cell(kind).get_or_init(probe)
    }
}

/// Decides once per kind whether a provider is active
pub struct ProviderDetector {
    probe: Box<dyn EnvironmentProbe>,
    availability: ProviderAvailability,
}

impl ProviderDetector {
    pub fn new(probe: impl EnvironmentProbe + 'static) -> Self {
        Self::from_boxed(Box::new(probe))
    }

    pub fn from_boxed(probe: Box<dyn EnvironmentProbe>) -> Self {
        Self {
            probe,
            availability: ProviderAvailability::new(),
        }
    }

    pub fn is_provider_active(&self, kind: ProviderKind) -> bool {
        self.availability.get_or_probe(kind, || {
            let present = self.probe.is_present(kind);
            debug!(provider = %kind, present, "Probed multilingual provider");
            present
        })
    }

    pub fn is_registry_provider_active(&self) -> bool {
        self.is_provider_active(ProviderKind::Registry)
    }

    pub fn is_function_provider_active(&self) -> bool {
        self.is_provider_active(ProviderKind::Function)
    }

    pub fn availability(&self) -> &ProviderAvailability {
        &self.availability
    }
}

impl std::fmt::Debug for ProviderDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDetector")
            .field("availability", &self.availability)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::mock::MockProbe;

    #[test]
    fn test_availability_starts_unknown() {
        let availability = ProviderAvailability::new();
        assert_eq!(availability.get(ProviderKind::Registry), None);
        assert_eq!(availability.get(ProviderKind::Function), None);
    }

    #[test]
    fn test_availability_is_write_once() {
        let availability = ProviderAvailability::new();
        assert!(availability.get_or_probe(ProviderKind::Function, || true));
        assert!(availability.get_or_probe(ProviderKind::Function, || false));
        assert_eq!(availability.get(ProviderKind::Function), Some(true));
        assert_eq!(availability.get(ProviderKind::Registry), None);
    }

    #[test]
    fn test_detector_probes_once_per_kind() {
        let probe = MockProbe::new(true, false);
        let detector = ProviderDetector::new(probe.clone());

        for _ in 0..3 {
            assert!(detector.is_registry_provider_active());
            assert!(!detector.is_function_provider_active());
        }

        assert_eq!(probe.probe_count(ProviderKind::Registry), 1);
        assert_eq!(probe.probe_count(ProviderKind::Function), 1);
    }

    #[test]
    fn test_detector_keeps_first_answer_after_removal() {
        let probe = MockProbe::new(true, true);
        let detector = ProviderDetector::new(probe.clone());

        assert!(detector.is_registry_provider_active());
        probe.set_present(ProviderKind::Registry, false);
        assert!(detector.is_registry_provider_active());
    }

    #[test]
    fn test_detector_is_lazy() {
        let probe = MockProbe::new(false, true);
        let detector = ProviderDetector::new(probe.clone());

        assert_eq!(probe.probe_count(ProviderKind::Function), 0);
        // Installed after construction but before the first query: seen.
        probe.set_present(ProviderKind::Registry, true);
        assert!(detector.is_registry_provider_active());
        assert_eq!(detector.availability().get(ProviderKind::Function), None);
    }
}
