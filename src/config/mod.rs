//! Configuration models for the registry and its audit sink.

pub mod registry;

pub use registry::{
    AuditConfig, CapacityPolicy, RegistryConfig, ENV_AUDIT_EVENTS, ENV_CAPACITY,
    ENV_CAPACITY_POLICY,
};
