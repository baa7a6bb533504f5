mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::error::WayakuError;
use defaults::*;

/// Top-level Wayaku configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub table: TableConfig,
}

/// Overlay runtime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Delay in milliseconds between a structural mutation notification
    /// and the re-pass it schedules. Notifications arriving inside the
    /// window coalesce into a single pass.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Periodic sweep — optional fixed-interval full re-pass.
///
/// Off by default; the mutation-driven observer is the primary strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_sweep_interval")]
    pub interval_secs: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_secs: default_sweep_interval(),
        }
    }
}

/// Extra phrase pairs merged into the translation table at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, WayakuError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| WayakuError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| WayakuError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
