//! # Station Registry
//!
//! Capacity-bounded bookkeeping for identified work units ("stations").
//!
//! A registry is created with a fixed slot count. Stations are registered with a
//! processing cost, switched between active and inactive, and removed again. The
//! registry answers aggregate questions (how many stations are active, how much
//! processing time they represent) in constant time, the same accounting a worker
//! pool or job-slot manager needs for admission decisions.
//!
//! ## Key Features
//!
//! - **Capability trait**: [`core::AssemblyLine`] describes the operation set;
//!   [`core::StationRegistry`] is the thread-safe implementation
//! - **Incremental aggregates**: active count and active processing time are kept
//!   up to date on every transition
//! - **Explicit audit sinks**: lifecycle events go to a sink passed in by the caller
//! - **Configuration**: JSON or environment-driven, validated before use
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use station_registry::builders::RegistryBuilder;
//! use station_registry::config::{AuditConfig, RegistryConfig};
//! use station_registry::core::AssemblyLine;
//!
//! let config = RegistryConfig {
//!     capacity: 5,
//!     audit: AuditConfig::InMemory { max_events: 64 },
//!     ..RegistryConfig::default()
//! };
//! let builder = RegistryBuilder::new(config);
//! let events = builder.audit_handle().expect("in-memory sink configured");
//! let line: Arc<dyn AssemblyLine> = Arc::new(builder.build()?);
//!
//! line.add_station(1, 10)?;
//! line.start_assembly(1)?;
//! assert_eq!(line.total_processing_time(), 10);
//! assert_eq!(events.len(), 2);
//! # Ok::<(), station_registry::core::RegistryError>(())
//! ```
//!
//! For complete examples, see `tests/registry_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Station records, the registry and its audit trail.
pub mod core;
/// Configuration models for the registry.
pub mod config;
/// Builders to construct registries from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;
