//! Ordered collections of probes.

use serde::{Deserialize, Serialize};

use crate::probe::error::{ProbeError, ProbeResult};
use crate::probe::Probe;

/// Several probes recorded together, in insertion order.
///
/// The group does not position its probes; callers translate each probe
/// before adding it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeGroup {
    /// Probes in insertion order.
    #[serde(default)]
    pub probes: Vec<Probe>,
}

impl ProbeGroup {
    /// Creates an empty group.
    #[must_use]
    pub const fn new() -> Self {
        Self { probes: Vec::new() }
    }

    /// Appends a probe.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::IncompatibleProbes`] when the probe's unit or
    /// dimensionality differs from the probes already in the group.
    pub fn add_probe(&mut self, probe: Probe) -> ProbeResult<()> {
        if let Some(first) = self.probes.first() {
            if first.si_units != probe.si_units {
                return Err(ProbeError::incompatible(format!(
                    "group uses {} but probe uses {}",
                    first.si_units, probe.si_units
                )));
            }
            if first.ndim != probe.ndim {
                return Err(ProbeError::incompatible(format!(
                    "group is {}-D but probe is {}-D",
                    first.ndim, probe.ndim
                )));
            }
        }
        self.probes.push(probe);
        Ok(())
    }

    /// Returns the number of probes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// Returns `true` if the group holds no probes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Total number of contacts across all probes.
    #[must_use]
    pub fn contact_count(&self) -> usize {
        self.probes.iter().map(Probe::contact_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::Unit;

    #[test]
    fn add_probe_keeps_order() {
        let mut group = ProbeGroup::new();
        let mut a = Probe::default();
        a.annotate("name", "a");
        let mut b = Probe::default();
        b.annotate("name", "b");

        group.add_probe(a).unwrap();
        group.add_probe(b).unwrap();

        assert_eq!(group.len(), 2);
        assert_eq!(group.probes[0].annotations["name"], "a");
        assert_eq!(group.probes[1].annotations["name"], "b");
    }

    #[test]
    fn add_probe_rejects_unit_mismatch() {
        let mut group = ProbeGroup::new();
        group.add_probe(Probe::new(Unit::Micrometre)).unwrap();
        let result = group.add_probe(Probe::new(Unit::Millimetre));
        assert!(matches!(result, Err(ProbeError::IncompatibleProbes { .. })));
        assert_eq!(group.len(), 1);
    }
}
