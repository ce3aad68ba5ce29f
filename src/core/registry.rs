//! Station registry with capacity accounting.
//!
//! `StationRegistry` owns a fixed slot count and a map of registered stations.
//! Active-station count and active processing time are maintained incrementally,
//! so every aggregate query is a single read under the shared lock.
//!
//! # Example
//!
//! ```
//! use station_registry::core::{AssemblyLine, StationRegistry};
//!
//! let line = StationRegistry::new(5)?;
//! line.add_station(1, 10)?;
//! line.add_station(2, 20)?;
//! line.start_assembly(1)?;
//! line.start_assembly(2)?;
//! assert_eq!(line.total_processing_time(), 30);
//!
//! line.stop_assembly(1)?;
//! assert_eq!(line.total_processing_time(), 20);
//! # Ok::<(), station_registry::core::RegistryError>(())
//! ```

use std::collections::HashMap;
use std::fmt;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::config::CapacityPolicy;
use crate::core::audit::{build_audit_event, AuditEvent, AuditSink, StationAction};
use crate::core::error::{RegistryError, RegistryResult};
use crate::core::station::{Station, StationId};
use crate::core::stats::RegistryStats;

/// Operations every assembly line registry provides.
///
/// All methods take `&self`; implementations serialize mutations internally so a
/// registry can be shared as `Arc<dyn AssemblyLine>`.
pub trait AssemblyLine: Send + Sync {
    /// Register an inactive station with the given processing time.
    fn add_station(&self, id: StationId, processing_time: i64) -> RegistryResult<()>;
    /// Unregister a station, deactivating it first.
    fn remove_station(&self, id: StationId) -> RegistryResult<()>;
    /// Mark a station active. Starting an active station is a no-op.
    fn start_assembly(&self, id: StationId) -> RegistryResult<()>;
    /// Mark a station inactive. Stopping an inactive station is a no-op.
    fn stop_assembly(&self, id: StationId) -> RegistryResult<()>;
    /// Processing time of a registered station, active or not.
    fn processing_time(&self, id: StationId) -> RegistryResult<u64>;
    /// Sum of processing time over active stations.
    fn total_processing_time(&self) -> u64;
    /// Configured slot count.
    fn num_stations(&self) -> usize;
    /// Number of active stations.
    fn num_active_stations(&self) -> usize;
    /// Number of slots not occupied by a registered station.
    fn num_inactive_stations(&self) -> usize;
    /// Whether a registered station is active.
    fn is_station_active(&self, id: StationId) -> RegistryResult<bool>;
}

/// State guarded by the registry lock.
#[derive(Debug, Default)]
struct RegistryState {
    stations: HashMap<StationId, Station>,
    active_count: usize,
    active_processing_time: u64,
}

impl RegistryState {
    fn get(&self, id: StationId) -> RegistryResult<&Station> {
        self.stations.get(&id).ok_or(RegistryError::NotFound(id))
    }

    fn get_mut(&mut self, id: StationId) -> RegistryResult<&mut Station> {
        self.stations.get_mut(&id).ok_or(RegistryError::NotFound(id))
    }

    fn inactive_slots(&self, capacity: usize) -> usize {
        capacity.saturating_sub(self.stations.len())
    }
}

/// Capacity-bounded registry of stations.
pub struct StationRegistry {
    capacity: usize,
    policy: CapacityPolicy,
    state: RwLock<RegistryState>,
    audit: Option<Mutex<Box<dyn AuditSink>>>,
}

impl fmt::Debug for StationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("StationRegistry")
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .field("registered", &state.stations.len())
            .field("active", &state.active_count)
            .field("audit", &self.audit.is_some())
            .finish()
    }
}

impl StationRegistry {
    /// Create an empty registry with `capacity` slots and the default
    /// [`CapacityPolicy::Enforce`] policy.
    pub fn new(capacity: i64) -> RegistryResult<Self> {
        Self::with_policy(capacity, CapacityPolicy::default())
    }

    /// Create an empty registry with an explicit over-capacity policy.
    pub fn with_policy(capacity: i64, policy: CapacityPolicy) -> RegistryResult<Self> {
        let Ok(capacity) = usize::try_from(capacity) else {
            warn!(capacity, "rejecting registry with negative capacity");
            return Err(RegistryError::InvalidConfiguration(format!(
                "number of stations cannot be negative (got {capacity})"
            )));
        };
        info!(capacity, ?policy, "station registry created");
        Ok(Self {
            capacity,
            policy,
            state: RwLock::new(RegistryState::default()),
            audit: None,
        })
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Mutex::new(audit));
        self
    }

    /// Over-capacity policy in effect.
    pub const fn capacity_policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Number of stations currently registered.
    pub fn num_registered_stations(&self) -> usize {
        self.state.read().stations.len()
    }

    /// Copy of a registered station's record.
    pub fn station(&self, id: StationId) -> RegistryResult<Station> {
        self.state.read().get(id).copied()
    }

    /// All registered stations ordered by id.
    pub fn stations(&self) -> Vec<Station> {
        let mut stations: Vec<Station> = self.state.read().stations.values().copied().collect();
        stations.sort_unstable_by_key(|s| s.id);
        stations
    }

    /// Consistent snapshot of all counters.
    pub fn stats(&self) -> RegistryStats {
        let state = self.state.read();
        RegistryStats {
            capacity: self.capacity,
            registered: state.stations.len(),
            active: state.active_count,
            inactive: state.inactive_slots(self.capacity),
            total_processing_time: state.active_processing_time,
        }
    }

    fn record_audit(&self, event: AuditEvent) {
        if let Some(audit) = &self.audit {
            audit.lock().record(event);
        }
    }

    /// Flip a station's active flag. Returns the event to record, or `None`
    /// when the station was already in the requested state.
    fn set_active(&self, id: StationId, active: bool) -> RegistryResult<Option<AuditEvent>> {
        let mut state = self.state.write();
        let station = *state.get(id)?;
        if station.active == active {
            debug!(station_id = id, active, "station already in requested state");
            return Ok(None);
        }

        let total = if active {
            state.active_processing_time.checked_add(station.processing_time)
        } else {
            state.active_processing_time.checked_sub(station.processing_time)
        };
        let Some(total) = total else {
            warn!(station_id = id, "active processing time would overflow");
            return Err(RegistryError::InvalidArgument(format!(
                "starting station {id} overflows the total processing time"
            )));
        };

        state.get_mut(id)?.active = active;
        state.active_processing_time = total;
        if active {
            state.active_count += 1;
        } else {
            state.active_count -= 1;
        }
        debug!(
            station_id = id,
            active,
            active_stations = state.active_count,
            total_processing_time = state.active_processing_time,
            "station state changed"
        );

        let action = if active {
            StationAction::Started
        } else {
            StationAction::Stopped
        };
        Ok(Some(build_audit_event(id, action, station.processing_time)))
    }
}

impl AssemblyLine for StationRegistry {
    fn add_station(&self, id: StationId, processing_time: i64) -> RegistryResult<()> {
        if id < 0 {
            warn!(station_id = id, "rejecting negative station id");
            return Err(RegistryError::InvalidArgument(format!(
                "station id cannot be negative (got {id})"
            )));
        }
        let Ok(processing_time) = u64::try_from(processing_time) else {
            warn!(station_id = id, processing_time, "rejecting negative processing time");
            return Err(RegistryError::InvalidArgument(format!(
                "processing time cannot be negative (got {processing_time})"
            )));
        };

        let event = {
            let mut state = self.state.write();
            if state.stations.contains_key(&id) {
                warn!(station_id = id, "rejecting duplicate station id");
                return Err(RegistryError::InvalidArgument(format!(
                    "station {id} already exists"
                )));
            }
            if self.policy == CapacityPolicy::Enforce && state.stations.len() >= self.capacity {
                warn!(station_id = id, capacity = self.capacity, "registry is full");
                return Err(RegistryError::CapacityExceeded {
                    capacity: self.capacity,
                });
            }
            state.stations.insert(id, Station::new(id, processing_time));
            debug!(
                station_id = id,
                processing_time,
                registered = state.stations.len(),
                "station added"
            );
            build_audit_event(id, StationAction::Added, processing_time)
        };
        self.record_audit(event);
        Ok(())
    }

    fn remove_station(&self, id: StationId) -> RegistryResult<()> {
        let event = {
            let mut state = self.state.write();
            let Some(station) = state.stations.remove(&id) else {
                warn!(station_id = id, "cannot remove unknown station");
                return Err(RegistryError::NotFound(id));
            };
            if station.active {
                state.active_count -= 1;
                state.active_processing_time -= station.processing_time;
            }
            debug!(
                station_id = id,
                was_active = station.active,
                registered = state.stations.len(),
                "station removed"
            );
            build_audit_event(id, StationAction::Removed, station.processing_time)
        };
        self.record_audit(event);
        Ok(())
    }

    fn start_assembly(&self, id: StationId) -> RegistryResult<()> {
        if let Some(event) = self.set_active(id, true)? {
            self.record_audit(event);
        }
        Ok(())
    }

    fn stop_assembly(&self, id: StationId) -> RegistryResult<()> {
        if let Some(event) = self.set_active(id, false)? {
            self.record_audit(event);
        }
        Ok(())
    }

    fn processing_time(&self, id: StationId) -> RegistryResult<u64> {
        self.state.read().get(id).map(|s| s.processing_time)
    }

    fn total_processing_time(&self) -> u64 {
        self.state.read().active_processing_time
    }

    fn num_stations(&self) -> usize {
        self.capacity
    }

    fn num_active_stations(&self) -> usize {
        self.state.read().active_count
    }

    fn num_inactive_stations(&self) -> usize {
        self.state.read().inactive_slots(self.capacity)
    }

    fn is_station_active(&self, id: StationId) -> RegistryResult<bool> {
        self.state.read().get(id).map(|s| s.active)
    }
}
