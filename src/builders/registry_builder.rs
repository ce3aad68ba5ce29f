//! Builder to construct a station registry from configuration.

use anyhow::Context;

use crate::config::{AuditConfig, RegistryConfig};
use crate::core::{
    AppResult, AuditSink, InMemoryAuditSink, RegistryResult, StationRegistry, TracingAuditSink,
};

/// Builds a [`StationRegistry`] and wires the configured audit sink.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    config: RegistryConfig,
    memory_sink: Option<InMemoryAuditSink>,
}

impl RegistryBuilder {
    /// Create a builder for the given configuration.
    pub fn new(config: RegistryConfig) -> Self {
        let memory_sink = match config.audit {
            AuditConfig::InMemory { max_events } => Some(InMemoryAuditSink::new(max_events)),
            AuditConfig::Disabled | AuditConfig::Tracing => None,
        };
        Self {
            config,
            memory_sink,
        }
    }

    /// Configuration this builder was created with.
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Handle to the in-memory audit buffer, when the configuration selects one.
    ///
    /// The handle shares its buffer with the sink handed to the built registry.
    pub fn audit_handle(&self) -> Option<InMemoryAuditSink> {
        self.memory_sink.clone()
    }

    /// Validate the configuration and build the registry.
    pub fn build(self) -> RegistryResult<StationRegistry> {
        let sink: Option<Box<dyn AuditSink>> = match (&self.config.audit, self.memory_sink) {
            (AuditConfig::InMemory { .. }, Some(sink)) => Some(Box::new(sink)),
            (AuditConfig::Tracing, _) => Some(Box::new(TracingAuditSink)),
            _ => None,
        };
        Self::assemble(&self.config, sink)
    }

    /// Build the registry with a caller-supplied sink instead of the configured one.
    pub fn build_with_sink(self, sink: Box<dyn AuditSink>) -> RegistryResult<StationRegistry> {
        Self::assemble(&self.config, Some(sink))
    }

    fn assemble(
        config: &RegistryConfig,
        sink: Option<Box<dyn AuditSink>>,
    ) -> RegistryResult<StationRegistry> {
        config.validate()?;
        let registry = StationRegistry::with_policy(config.capacity, config.capacity_policy)?;
        Ok(match sink {
            Some(sink) => registry.with_audit(sink),
            None => registry,
        })
    }
}

/// Load configuration from the environment and build a registry in one step.
pub fn registry_from_env() -> AppResult<StationRegistry> {
    let config = RegistryConfig::from_env().context("loading registry configuration")?;
    let registry = RegistryBuilder::new(config)
        .build()
        .context("building station registry")?;
    Ok(registry)
}
