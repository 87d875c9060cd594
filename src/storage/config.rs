//! Application configuration.
//!
//! Loaded from `config.toml` in the platform data directory. Every section
//! has defaults, so a missing file or a partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::companion::CompanionState;
use crate::progression::{LevelingPolicy, ProgressionState};
use crate::streaks::StreakReset;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// XP and leveling
    pub progression: ProgressionSettings,
    /// Starting companion values
    pub companion: CompanionSettings,
    /// Streak behaviour
    pub streaks: StreakSettings,
    /// Persistence
    pub storage: StorageSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            progression: ProgressionSettings::default(),
            companion: CompanionSettings::default(),
            streaks: StreakSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

impl AppConfig {
    /// Full path of the snapshot database.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.storage.database_file)
    }
}

/// XP and leveling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionSettings {
    /// Level for a new profile
    pub starting_level: u32,
    /// XP toward the next level for a new profile
    pub starting_xp: u32,
    /// Threshold for the first level-up
    pub first_level_xp: u32,
    /// Threshold growth per level
    pub level_increment: u32,
    /// Single-step or full rollover
    pub leveling: LevelingPolicy,
}

impl Default for ProgressionSettings {
    fn default() -> Self {
        Self {
            starting_level: 1,
            starting_xp: 0,
            first_level_xp: 1000,
            level_increment: 1000,
            leveling: LevelingPolicy::SingleStep,
        }
    }
}

impl ProgressionSettings {
    /// Build the initial progression state.
    pub fn initial_state(&self) -> ProgressionState {
        ProgressionState::new(self.starting_level, self.starting_xp, self.first_level_xp)
            .with_increment(self.level_increment)
            .with_policy(self.leveling)
    }
}

/// Starting companion values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionSettings {
    pub name: String,
    pub health: u8,
    pub happiness: u8,
    pub energy: u8,
    pub coins: u32,
}

impl Default for CompanionSettings {
    fn default() -> Self {
        let companion = CompanionState::default();
        Self {
            name: companion.name,
            health: companion.health,
            happiness: companion.happiness,
            energy: companion.energy,
            coins: companion.coins,
        }
    }
}

impl CompanionSettings {
    /// Build the initial companion.
    pub fn initial_state(&self) -> CompanionState {
        CompanionState {
            name: self.name.clone(),
            ..CompanionState::new(self.health, self.happiness, self.energy, self.coins)
        }
    }
}

/// Streak settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakSettings {
    /// What a missed day does to a streak
    pub reset: StreakReset,
}

/// Persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// SQLite file name inside the data directory
    pub database_file: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_file: "flowsense.db".to_string(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "flowsense", "FlowSense")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_config_from(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load configuration from a specific file; a missing file gives defaults.
///
/// `data_dir` is set to the file's parent directory.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let data_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    if !path.exists() {
        tracing::debug!("No config at {:?}, using defaults", path);
        return Ok(AppConfig {
            data_dir,
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = data_dir;

    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to a specific file.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content = toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
