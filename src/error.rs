use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while running a match.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("unknown agent '{0}' (expected 'tactical' or 'random')")]
    UnknownAgent(String),

    #[error("agent selected illegal action {action} (legal: {legal:?})")]
    IllegalAction { action: usize, legal: Vec<usize> },

    #[error("agent returned no action for a live position")]
    NoAction,
}
