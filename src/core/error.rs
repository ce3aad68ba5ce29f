//! Error types for registry operations.

use thiserror::Error;

use crate::core::station::StationId;

/// Errors produced by registry components.
///
/// Every error is returned to the caller as-is; a failed operation leaves the
/// registry exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Malformed constructor or configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Malformed call argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The referenced station is not registered.
    #[error("station {0} not found")]
    NotFound(StationId),
    /// Registration would exceed the configured slot count.
    #[error("capacity exceeded: registry already holds {capacity} stations")]
    CapacityExceeded {
        /// Configured slot count.
        capacity: usize,
    },
}

impl RegistryError {
    /// Whether this error refers to an unregistered station.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
