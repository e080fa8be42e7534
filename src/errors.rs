use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VehicleError {
    #[error("Vehicle '{0}' cannot be created")]
    UnknownVariant(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read configuration file `{}`: {source}", .path.display())]
    ConfigNotReadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),
}

impl VehicleError {
    pub fn unknown_variant<S: Into<String>>(key: S) -> Self {
        Self::UnknownVariant(key.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Returns the offending key when this is an `UnknownVariant` error.
    pub fn unknown_key(&self) -> Option<&str> {
        match self {
            Self::UnknownVariant(key) => Some(key),
            _ => None,
        }
    }
}
