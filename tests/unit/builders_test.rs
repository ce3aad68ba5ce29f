//! Tests for builder modules

use station_registry::builders::RegistryBuilder;
use station_registry::config::{AuditConfig, CapacityPolicy, RegistryConfig};
use station_registry::core::{
    AssemblyLine, AuditEvent, AuditSink, RegistryError, StationAction,
};

use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CollectingSink(Arc<Mutex<Vec<AuditEvent>>>);

impl AuditSink for CollectingSink {
    fn record(&mut self, event: AuditEvent) {
        self.0.lock().unwrap().push(event);
    }
}

#[test]
fn test_registry_builder_defaults() {
    let config = RegistryConfig::with_capacity(5);
    let builder = RegistryBuilder::new(config.clone());
    assert_eq!(builder.config(), &config);
    assert!(builder.audit_handle().is_none());

    let registry = builder.build().unwrap();
    assert_eq!(registry.num_stations(), 5);
    assert_eq!(registry.capacity_policy(), CapacityPolicy::Enforce);
}

#[test]
fn test_registry_builder_rejects_invalid_config() {
    let err = RegistryBuilder::new(RegistryConfig::with_capacity(-2))
        .build()
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidConfiguration(_)));
}

#[test]
fn test_registry_builder_wires_in_memory_sink() {
    let config = RegistryConfig {
        capacity: 3,
        capacity_policy: CapacityPolicy::SlotCountOnly,
        audit: AuditConfig::InMemory { max_events: 8 },
    };
    let builder = RegistryBuilder::new(config);
    let events = builder.audit_handle().unwrap();
    let registry = builder.build().unwrap();

    registry.add_station(1, 10).unwrap();
    registry.remove_station(1).unwrap();

    assert_eq!(registry.capacity_policy(), CapacityPolicy::SlotCountOnly);
    assert_eq!(events.len(), 2);
    assert_eq!(events.events()[1].action, StationAction::Removed);
}

#[test]
fn test_registry_builder_with_custom_sink() {
    let sink = CollectingSink::default();
    let registry = RegistryBuilder::new(RegistryConfig::with_capacity(2))
        .build_with_sink(Box::new(sink.clone()))
        .unwrap();

    registry.add_station(1, 10).unwrap();
    registry.start_assembly(1).unwrap();

    let recorded = sink.0.lock().unwrap();
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[1].action, StationAction::Started);
}
