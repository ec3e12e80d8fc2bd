//! Errors from parsing a configuration override.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from decoding a `BaziConfigOverrides` blob.
#[derive(Debug)]
#[non_exhaustive]
pub enum ConfigError {
    InvalidToml(toml::de::Error),
    InvalidJson(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToml(e) => write!(f, "invalid TOML config override: {e}"),
            Self::InvalidJson(e) => write!(f, "invalid JSON config override: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidToml(e) => Some(e),
            Self::InvalidJson(e) => Some(e),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::InvalidToml(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidJson(e)
    }
}
