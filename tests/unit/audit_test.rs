//! Tests for audit sinks

use station_registry::core::{
    build_audit_event, AssemblyLine, AuditSink, InMemoryAuditSink, StationAction,
    StationRegistry, TracingAuditSink,
};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event(1, StationAction::Added, 10);
    sink.record(event.clone());
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0], event);
    assert_eq!(events[0].station_id, 1);
    assert_eq!(events[0].action, StationAction::Added);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(1, StationAction::Added, 10));
    sink.record(build_audit_event(2, StationAction::Added, 20));
    sink.record(build_audit_event(3, StationAction::Added, 30));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].station_id, 2); // First one popped
    assert_eq!(events[1].station_id, 3);
    assert_eq!(sink.max_events(), 2);
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event(4, StationAction::Stopped, 40);

    assert_eq!(event.station_id, 4);
    assert_eq!(event.action, StationAction::Stopped);
    assert_eq!(event.processing_time, 40);
    assert!(event.created_at_ms > 0);
}

#[test]
fn test_registry_records_lifecycle() {
    let sink = InMemoryAuditSink::new(16);
    let registry = StationRegistry::new(5)
        .unwrap()
        .with_audit(Box::new(sink.clone()));

    registry.add_station(1, 10).unwrap();
    registry.start_assembly(1).unwrap();
    registry.stop_assembly(1).unwrap();
    registry.start_assembly(1).unwrap();
    registry.remove_station(1).unwrap();

    let actions: Vec<StationAction> = sink.events().iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![
            StationAction::Added,
            StationAction::Started,
            StationAction::Stopped,
            StationAction::Started,
            StationAction::Removed,
        ]
    );
    assert!(sink.events().iter().all(|e| e.processing_time == 10));
}

#[test]
fn test_failed_operations_are_not_recorded() {
    let sink = InMemoryAuditSink::new(16);
    let registry = StationRegistry::new(1)
        .unwrap()
        .with_audit(Box::new(sink.clone()));

    assert!(registry.add_station(-1, 10).is_err());
    assert!(registry.remove_station(3).is_err());
    assert!(registry.start_assembly(3).is_err());
    registry.add_station(1, 10).unwrap();
    assert!(registry.add_station(1, 10).is_err());
    assert!(registry.add_station(2, 10).is_err());

    assert_eq!(sink.len(), 1);
}

#[test]
fn test_tracing_sink_accepts_events() {
    let registry = StationRegistry::new(2)
        .unwrap()
        .with_audit(Box::new(TracingAuditSink));
    registry.add_station(1, 3).unwrap();
    registry.start_assembly(1).unwrap();
    assert_eq!(registry.total_processing_time(), 3);
}

#[test]
fn test_action_names() {
    assert_eq!(StationAction::Added.as_str(), "added");
    assert_eq!(StationAction::Removed.as_str(), "removed");
    assert_eq!(StationAction::Started.as_str(), "started");
    assert_eq!(StationAction::Stopped.as_str(), "stopped");
}
