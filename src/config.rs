use std::path::Path;

use crate::error::ConfigError;

/// Arena settings: how many games to play and how they run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of games per match.
    pub games: usize,
    /// Base RNG seed; the two agents derive their seeds from it.
    pub base_seed: u64,
    /// Hard cap on moves per game before it counts as truncated.
    pub max_moves: usize,
    /// Show a progress bar while the match runs.
    pub progress: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 200,
            base_seed: 42,
            max_moves: 42,
            progress: true,
        }
    }
}

/// Which agents face each other by default.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchupConfig {
    pub agent: String,
    pub opponent: String,
}

impl Default for MatchupConfig {
    fn default() -> Self {
        MatchupConfig {
            agent: "tactical".to_string(),
            opponent: "random".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub arena: ArenaConfig,
    pub matchup: MatchupConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be > 0".into()));
        }
        if self.arena.max_moves == 0 {
            return Err(ConfigError::Validation(
                "arena.max_moves must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
