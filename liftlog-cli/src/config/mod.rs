use anyhow::{Context, Result};
use liftlog::services::{ProjectionOptions, StartingMaxima};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub program: ProgramConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub projection: ProjectionConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramConfig {
    #[serde(default = "default_program_cycles")]
    pub default_cycles: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_generator_cycles")]
    pub default_cycles: u32,

    /// Fallback maxima when neither flags nor history supply one
    #[serde(default = "default_squat_max")]
    pub squat_max: f64,

    #[serde(default = "default_bench_max")]
    pub bench_max: f64,

    #[serde(default = "default_deadlift_max")]
    pub deadlift_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    #[serde(default = "default_days_between_sessions")]
    pub days_between_sessions: i64,

    /// 0 disables the moving average
    #[serde(default = "default_moving_average_window")]
    pub moving_average_window: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// TOML table of exercise name to category, merged over the built-in library
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// Default value functions
fn default_program_cycles() -> u32 {
    1
}

fn default_generator_cycles() -> u32 {
    4
}

fn default_squat_max() -> f64 {
    225.0
}

fn default_bench_max() -> f64 {
    185.0
}

fn default_deadlift_max() -> f64 {
    275.0
}

fn default_days_between_sessions() -> i64 {
    2
}

fn default_moving_average_window() -> usize {
    7
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            default_cycles: default_program_cycles(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_cycles: default_generator_cycles(),
            squat_max: default_squat_max(),
            bench_max: default_bench_max(),
            deadlift_max: default_deadlift_max(),
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            days_between_sessions: default_days_between_sessions(),
            moving_average_window: default_moving_average_window(),
        }
    }
}

impl GeneratorConfig {
    pub fn fallback_maxima(&self) -> StartingMaxima {
        StartingMaxima {
            squat: self.squat_max,
            bench: self.bench_max,
            deadlift: self.deadlift_max,
        }
    }
}

impl ProjectionConfig {
    /// Core projection options, with `window` overriding the configured one
    pub fn options(&self, window: Option<usize>) -> ProjectionOptions {
        let window = window.unwrap_or(self.moving_average_window);
        ProjectionOptions {
            days_between_sessions: self.days_between_sessions,
            moving_average_window: (window > 0).then_some(window),
        }
    }
}

impl Config {
    /// Get config directory path (~/.liftlog/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".liftlog"))
    }

    /// Get config file path (~/.liftlog/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Explicit path if given, else the default location
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_file(),
        }
    }

    /// Load configuration from `path` (default location when `None`)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_file = Self::resolve_path(path)?;

        if !config_file.exists() {
            tracing::info!("Config file not found at {}, using defaults", config_file.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_file)
            .with_context(|| format!("Failed to read config file {}", config_file.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", config_file.display()))?;

        tracing::debug!("Loaded config from {}", config_file.display());
        Ok(config)
    }

    /// Save configuration to `path` (default location when `None`)
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_file = Self::resolve_path(path)?;
        if let Some(dir) = config_file.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(config_file)
    }
}
