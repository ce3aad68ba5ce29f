//! Audit sink implementations.
//!
//! The registry reports each successful lifecycle change to an explicitly
//! attached sink. There is no process-wide logger; callers construct a sink and
//! hand it to the registry, keeping a cloned handle if they want to read it back.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::station::StationId;
use crate::util::clock::now_ms;

/// Lifecycle transition recorded for a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationAction {
    /// Station registered.
    Added,
    /// Station unregistered.
    Removed,
    /// Station switched to active.
    Started,
    /// Station switched to inactive.
    Stopped,
}

impl StationAction {
    /// Stable lowercase name used in log records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Started => "started",
            Self::Stopped => "stopped",
        }
    }
}

/// Audit event structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: Uuid,
    /// Station the event refers to.
    pub station_id: StationId,
    /// Transition that happened.
    pub action: StationAction,
    /// Processing time of the station at the time of the event.
    pub processing_time: u64,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink with a bounded buffer.
///
/// Clones share the same buffer, so a caller can keep one handle and pass
/// another to the registry.
#[derive(Debug, Clone)]
pub struct InMemoryAuditSink {
    events: Arc<Mutex<VecDeque<AuditEvent>>>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink holding at most `max_events` events.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_events))),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events, oldest first.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().iter().cloned().collect()
    }

    /// Number of buffered events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Maximum number of buffered events.
    pub const fn max_events(&self) -> usize {
        self.max_events
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        let mut events = self.events.lock();
        if events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }
}

/// Sink that forwards every event to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&mut self, event: AuditEvent) {
        tracing::info!(
            event_id = %event.event_id,
            station_id = event.station_id,
            action = event.action.as_str(),
            processing_time = event.processing_time,
            created_at_ms = %event.created_at_ms,
            "station lifecycle event"
        );
    }
}

/// Helper to build an audit event stamped with a fresh id and the current time.
pub fn build_audit_event(
    station_id: StationId,
    action: StationAction,
    processing_time: u64,
) -> AuditEvent {
    AuditEvent {
        event_id: Uuid::new_v4(),
        station_id,
        action,
        processing_time,
        created_at_ms: now_ms(),
    }
}
