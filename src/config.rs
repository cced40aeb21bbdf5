use crate::waybar::ColorOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DAYS: i64 = 7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DaysError {
    #[error("Days must be a positive number")]
    NotPositive,
    #[error("Days must be at most {}", u32::MAX)]
    TooLarge,
}

/// Every field is optional so command line values can be layered on top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub days: Option<i64>,
    pub active_color: Option<String>,
    pub inactive_color: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// `$XDG_CONFIG_HOME/arch-news/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("arch-news").join("config.toml"))
    }

    /// Load the config file.
    ///
    /// An explicit path must exist. The default path is optional and a missing
    /// file yields an empty config.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fill any unset field from `base`.
    pub fn layered_over(self, base: Config) -> Config {
        Config {
            days: self.days.or(base.days),
            active_color: self.active_color.or(base.active_color),
            inactive_color: self.inactive_color.or(base.inactive_color),
            timeout_secs: self.timeout_secs.or(base.timeout_secs),
        }
    }

    pub fn into_settings(self) -> Settings {
        Settings {
            days: self.days.unwrap_or(DEFAULT_DAYS),
            colors: ColorOptions {
                active: self.active_color,
                inactive: self.inactive_color,
            },
            timeout: Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub days: i64,
    pub colors: ColorOptions,
    pub timeout: Duration,
}

impl Settings {
    pub fn validated_days(&self) -> Result<u32, DaysError> {
        validate_days(self.days)
    }
}

pub fn validate_days(days: i64) -> Result<u32, DaysError> {
    if days <= 0 {
        return Err(DaysError::NotPositive);
    }
    u32::try_from(days).map_err(|_| DaysError::TooLarge)
}
