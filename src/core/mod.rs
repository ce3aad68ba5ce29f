//! Station bookkeeping and capacity accounting.

pub mod audit;
pub mod error;
pub mod registry;
pub mod station;
pub mod stats;

pub use audit::{
    build_audit_event, AuditEvent, AuditSink, InMemoryAuditSink, StationAction, TracingAuditSink,
};
pub use error::{AppResult, RegistryError, RegistryResult};
pub use registry::{AssemblyLine, StationRegistry};
pub use station::{Station, StationId, StationState};
pub use stats::RegistryStats;
