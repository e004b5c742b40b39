use color_eyre::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Cross-fade tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub duration_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { duration_ms: 250 }
    }
}

/// Search demo tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Index of the search domain the container opens on.
    pub initial_index: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { initial_index: 3 }
    }
}

impl Config {
    /// Loads configuration from disk, creating a default file on first
    /// run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Returns the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "switchdeck")
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Returns the path of the lifecycle log file
    pub fn log_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "switchdeck")
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine data directory"))?;
        Ok(proj_dirs.data_dir().join("switchdeck.log"))
    }

    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition.duration_ms)
    }
}
