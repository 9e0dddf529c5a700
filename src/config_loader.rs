use crate::config::NetworkConfig;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<NetworkConfig> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)?;
    let config: NetworkConfig = serde_yaml::from_reader(file)?;

    config.validate()?;

    Ok(config)
}

/// CLI arguments that can override YAML settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub max_attempts: Option<u32>,
    pub start_node: Option<usize>,
}

/// Apply CLI overrides to a loaded configuration
pub fn apply_overrides(config: &mut NetworkConfig, overrides: &CliOverrides) -> Result<()> {
    if let Some(seed) = overrides.seed {
        info!("Overriding seed: {}", seed);
        config.seed = Some(seed);
    }

    if let Some(max_attempts) = overrides.max_attempts {
        info!("Overriding max_attempts: {}", max_attempts);
        config.routing.max_attempts = max_attempts;
    }

    if let Some(start_node) = overrides.start_node {
        info!("Overriding start_node: {}", start_node);
        config.routing.start_node = start_node;
    }

    // Re-validate after applying overrides
    config.validate()?;

    Ok(())
}
