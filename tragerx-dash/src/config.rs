//! Configuration loading for the TragerX dashboard

use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tragerx_map::{ADMIN_MAP_SIZE, MapLayout, MovementConfig, RenderConfig, USER_MAP_SIZE};

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DashConfig {
    #[serde(default)]
    pub map: MapSection,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub movement: MovementConfig,
    #[serde(default)]
    pub fleet: FleetConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Store map settings
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MapSection {
    /// Grid size of the admin map (default: 50)
    #[serde(default = "default_admin_size")]
    pub admin_size: usize,

    /// Grid size of the user "my trolley" map (default: 30)
    #[serde(default = "default_user_size")]
    pub user_size: usize,

    /// Obstacle layout overrides
    #[serde(default)]
    pub layout: MapLayout,
}

/// Mock fleet settings
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FleetConfig {
    /// Rows in the fleet management table (default: 15)
    #[serde(default = "default_num_trolleys")]
    pub num_trolleys: usize,

    /// Random seed, 0 for a fresh seed on every run (default: 0)
    #[serde(default)]
    pub seed: u64,
}

/// Trolley dispatch animation
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DispatchConfig {
    /// Pause between progress steps in milliseconds (default: 50)
    #[serde(default = "default_step_interval")]
    pub step_interval_ms: u64,
}

/// Output configuration
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory for map and QR images (default: ./output)
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

// Default value functions
fn default_admin_size() -> usize {
    ADMIN_MAP_SIZE
}
fn default_user_size() -> usize {
    USER_MAP_SIZE
}
fn default_num_trolleys() -> usize {
    15
}
fn default_step_interval() -> u64 {
    50
}
fn default_output_dir() -> String {
    "./output".to_string()
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            admin_size: default_admin_size(),
            user_size: default_user_size(),
            layout: MapLayout::default(),
        }
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            num_trolleys: default_num_trolleys(),
            seed: 0,
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: default_step_interval(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl DashConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DashError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: DashConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.map.admin_size == 0 || self.map.user_size == 0 {
            return Err(DashError::Config("map sizes must be positive".to_string()));
        }
        self.render.validate(self.map.admin_size)?;
        self.render.validate(self.map.user_size)?;
        self.map.layout.validate()?;
        self.movement.validate()?;
        Ok(())
    }
}
