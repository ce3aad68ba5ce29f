//! Registry configuration structures.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{RegistryError, RegistryResult};

/// Environment variable holding the slot count.
pub const ENV_CAPACITY: &str = "STATION_REGISTRY_CAPACITY";
/// Environment variable selecting the over-capacity policy.
pub const ENV_CAPACITY_POLICY: &str = "STATION_REGISTRY_CAPACITY_POLICY";
/// Environment variable enabling the in-memory audit sink with the given bound.
pub const ENV_AUDIT_EVENTS: &str = "STATION_REGISTRY_AUDIT_EVENTS";

/// What `add_station` does once every slot holds a registered station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityPolicy {
    /// Reject additions beyond the slot count.
    #[default]
    Enforce,
    /// Treat capacity only as the reported slot count; additions are unbounded.
    SlotCountOnly,
}

impl FromStr for CapacityPolicy {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enforce" => Ok(Self::Enforce),
            "slot_count_only" => Ok(Self::SlotCountOnly),
            other => Err(RegistryError::InvalidConfiguration(format!(
                "unknown capacity policy `{other}`"
            ))),
        }
    }
}

/// Audit sink selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditConfig {
    /// No lifecycle events are recorded.
    #[default]
    Disabled,
    /// Bounded in-memory buffer.
    InMemory {
        /// Maximum buffered events.
        max_events: usize,
    },
    /// Forward events to `tracing`.
    Tracing,
}

/// Registry configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Slot count. Must not be negative.
    pub capacity: i64,
    /// Over-capacity policy.
    #[serde(default)]
    pub capacity_policy: CapacityPolicy,
    /// Audit sink selection.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl RegistryConfig {
    /// Configuration with the given capacity and defaults elsewhere.
    pub fn with_capacity(capacity: i64) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> RegistryResult<()> {
        if self.capacity < 0 {
            return Err(RegistryError::InvalidConfiguration(format!(
                "capacity must not be negative (got {})",
                self.capacity
            )));
        }
        if matches!(self.audit, AuditConfig::InMemory { max_events: 0 }) {
            return Err(RegistryError::InvalidConfiguration(
                "audit max_events must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Parse registry configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> RegistryResult<Self> {
        let cfg: Self = serde_json::from_str(input)
            .map_err(|e| RegistryError::InvalidConfiguration(format!("parse error: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the process environment, reading a `.env`
    /// file first when one is present.
    pub fn from_env() -> RegistryResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> RegistryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let capacity = lookup(ENV_CAPACITY).ok_or_else(|| {
            RegistryError::InvalidConfiguration(format!(
                "required environment variable {ENV_CAPACITY} is not set"
            ))
        })?;
        let capacity = capacity.trim().parse::<i64>().map_err(|e| {
            RegistryError::InvalidConfiguration(format!("{ENV_CAPACITY}: {e}"))
        })?;

        let capacity_policy = lookup(ENV_CAPACITY_POLICY)
            .map(|v| v.parse::<CapacityPolicy>())
            .transpose()?
            .unwrap_or_default();

        let audit = match lookup(ENV_AUDIT_EVENTS) {
            Some(v) => {
                let max_events = v.trim().parse::<usize>().map_err(|e| {
                    RegistryError::InvalidConfiguration(format!("{ENV_AUDIT_EVENTS}: {e}"))
                })?;
                AuditConfig::InMemory { max_events }
            }
            None => AuditConfig::Disabled,
        };

        let cfg = Self {
            capacity,
            capacity_policy,
            audit,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}
