use serde::{Deserialize, Serialize};

use crate::topology::generator::check_populations;
use crate::topology::TierSizes;

/// Top-level configuration structure that mirrors the YAML configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NetworkConfig {
    /// Node count per tier
    pub tiers: TierSizes,
    /// Connectivity gate and retry policy
    pub routing: RoutingConfig,
    /// (Optional) Seed for reproducible generation; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Retry policy for the regenerate-until-connected loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Generation attempts before giving up on a connected topology
    pub max_attempts: u32,
    /// Node the connectivity check starts from
    pub start_node: usize,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            start_node: 0,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid tier configuration: {0}")]
    InvalidTiers(String),
    #[error("Invalid routing configuration: {0}")]
    InvalidRouting(String),
}

impl NetworkConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let total = self.tiers.total();
        if total == 0 {
            return Err(ValidationError::InvalidTiers(
                "topology must contain at least one node".to_string(),
            ));
        }
        check_populations(&self.tiers)
            .map_err(|e| ValidationError::InvalidTiers(e.to_string()))?;

        if self.routing.max_attempts == 0 {
            return Err(ValidationError::InvalidRouting(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.routing.start_node >= total {
            return Err(ValidationError::InvalidRouting(format!(
                "start_node {} is out of range (topology has {} nodes)",
                self.routing.start_node, total
            )));
        }

        Ok(())
    }
}
