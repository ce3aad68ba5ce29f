//! Tests for error types

use station_registry::core::RegistryError;

#[test]
fn test_invalid_configuration_error() {
    let err = RegistryError::InvalidConfiguration("capacity must not be negative".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: capacity must not be negative"
    );
}

#[test]
fn test_invalid_argument_error() {
    let err = RegistryError::InvalidArgument("station 1 already exists".to_string());
    assert_eq!(format!("{}", err), "invalid argument: station 1 already exists");
}

#[test]
fn test_not_found_error() {
    let err = RegistryError::NotFound(12);
    assert_eq!(format!("{}", err), "station 12 not found");
    assert!(err.is_not_found());
}

#[test]
fn test_capacity_exceeded_error() {
    let err = RegistryError::CapacityExceeded { capacity: 5 };
    assert_eq!(
        format!("{}", err),
        "capacity exceeded: registry already holds 5 stations"
    );
    assert!(!err.is_not_found());
}

#[test]
fn test_error_converts_into_anyhow() {
    let err: anyhow::Error = RegistryError::NotFound(3).into();
    assert_eq!(
        err.downcast_ref::<RegistryError>(),
        Some(&RegistryError::NotFound(3))
    );
}
