//! Point-in-time registry statistics.

use serde::{Deserialize, Serialize};

/// Snapshot of registry counters, taken under one read lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Configured slot count.
    pub capacity: usize,
    /// Stations currently registered.
    pub registered: usize,
    /// Registered stations that are active.
    pub active: usize,
    /// Slots not occupied by a registered station.
    pub inactive: usize,
    /// Sum of processing time over active stations.
    pub total_processing_time: u64,
}

impl RegistryStats {
    /// Free slots left before an enforced registry rejects additions.
    pub const fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.registered)
    }

    /// Fraction of slots holding an active station, in `0.0..=1.0`.
    ///
    /// Returns `0.0` for a zero-capacity registry.
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.active as f64 / self.capacity as f64).min(1.0)
    }
}
