//! Station records owned by the registry.

use serde::{Deserialize, Serialize};

/// Identifier of a station. Only non-negative values can be registered.
pub type StationId = i64;

/// Activity state of a registered station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationState {
    /// Registered but not assembling.
    Inactive,
    /// Assembling; its processing time counts toward the active total.
    Active,
}

/// A registered station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Unique station identifier.
    pub id: StationId,
    /// Processing cost in arbitrary time units.
    pub processing_time: u64,
    /// Whether the station is currently assembling.
    pub active: bool,
}

impl Station {
    /// Create an inactive station.
    pub const fn new(id: StationId, processing_time: u64) -> Self {
        Self {
            id,
            processing_time,
            active: false,
        }
    }

    /// Current activity state.
    pub const fn state(&self) -> StationState {
        if self.active {
            StationState::Active
        } else {
            StationState::Inactive
        }
    }

    /// Cost this station contributes to the active processing total.
    pub const fn active_cost(&self) -> u64 {
        if self.active {
            self.processing_time
        } else {
            0
        }
    }
}
