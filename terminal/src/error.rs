//! Error types for the trading terminal.

use std::path::PathBuf;

/// Errors that stop the terminal: bad configuration or broken I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid market: {0}")]
    Market(#[from] papertrade::RegistryError),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A menu entry that does not exist. Reported and the loop continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("invalid selection: {0:?}")]
    InvalidSelection(String),
}
