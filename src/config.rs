//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`GRAVSIM_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use gravsim_physics::SimulationConfig;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulation driver configuration
    #[serde(default)]
    pub simulation: SimulationSettings,
    /// Physics overrides
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`GRAVSIM_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // GRAVSIM_PHYSICS__DT=0.5 -> physics.dt = 0.5
        figment = figment.merge(Env::prefixed("GRAVSIM_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Simulation driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Path to the RON system file
    pub system_path: String,
    /// Number of ticks to run
    pub ticks: u64,
    /// Target ticks per second (0 = as fast as possible)
    pub frame_rate: u32,
    /// Log body positions every N ticks (0 = never)
    pub log_interval: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            system_path: "assets/systems/solar.ron".to_string(),
            ticks: 1000,
            frame_rate: 0,
            log_interval: 100,
        }
    }
}

/// Physics overrides applied on top of the system file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravitational constant
    #[serde(default)]
    pub gravitational_constant: Option<f64>,
    /// Fixed time step
    #[serde(default)]
    pub dt: Option<f64>,
}

impl PhysicsConfig {
    /// Apply these overrides to the config a system file asked for
    pub fn to_simulation_config(&self, base: SimulationConfig) -> SimulationConfig {
        SimulationConfig::new(
            self.gravitational_constant.unwrap_or(base.gravitational_constant),
            self.dt.unwrap_or(base.dt),
        )
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
