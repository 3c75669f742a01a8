//! Error types for Rollcall Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No eligible participants to draw from")]
    EmptyPool,

    #[error("Invalid group size: {0} (must be at least 1)")]
    InvalidGroupSize(i64),

    #[error("A draw is already running")]
    AlreadyRunning,

    #[error("No draw is running")]
    NotRunning,

    #[error("The roster is empty")]
    EmptyRoster,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
