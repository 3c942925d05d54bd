//! Configuration file support for EliteFit.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/elitefit/config.toml`.

use crate::types::UnitSystem;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub units: UnitsConfig,

    #[serde(default)]
    pub targets: TargetsConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Default unit system for BMI entry
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnitsConfig {
    #[serde(default = "default_unit_system")]
    pub default: UnitSystem,
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            default: default_unit_system(),
        }
    }
}

/// Daily goal targets shown on the dashboard
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TargetsConfig {
    #[serde(default = "default_steps_target")]
    pub steps: u32,

    #[serde(default = "default_water_target")]
    pub water_l: f64,

    #[serde(default = "default_sleep_target")]
    pub sleep_hours: f64,

    #[serde(default = "default_calories_target")]
    pub calories_kcal: u32,

    #[serde(default = "default_protein_target")]
    pub protein_g: u32,

    #[serde(default = "default_carbs_target")]
    pub carbs_g: u32,

    #[serde(default = "default_fat_target")]
    pub fat_g: u32,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            steps: default_steps_target(),
            water_l: default_water_target(),
            sleep_hours: default_sleep_target(),
            calories_kcal: default_calories_target(),
            protein_g: default_protein_target(),
            carbs_g: default_carbs_target(),
            fat_g: default_fat_target(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("elitefit")
}

fn default_unit_system() -> UnitSystem {
    UnitSystem::Metric
}

fn default_steps_target() -> u32 {
    10_000
}

fn default_water_target() -> f64 {
    3.0
}

fn default_sleep_target() -> f64 {
    8.0
}

fn default_calories_target() -> u32 {
    2000
}

fn default_protein_target() -> u32 {
    150
}

fn default_carbs_target() -> u32 {
    250
}

fn default_fat_target() -> u32 {
    65
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("elitefit").join("config.toml")
    }
}
