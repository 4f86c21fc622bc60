//! Tool configuration loading (`padlink.toml`).

#![allow(missing_docs)]

use std::io;
use std::path::Path;

use serde::Deserialize;
use smol_str::SmolStr;
use thiserror::Error;

use crate::project::{SampleName, DEFAULT_SAMPLE};

/// Configuration file name, looked up in the project directory.
pub const CONFIG_FILE: &str = "padlink.toml";

const DEFAULT_BASE_URL: &str = "https://playground.example.dev/";
const MAX_FILE_BYTES: usize = 256 * 1024;
const MAX_FILES: usize = 64;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed or out-of-range configuration value.
    #[error("invalid config '{0}'")]
    InvalidConfig(SmolStr),

    /// Configuration file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PadlinkConfig {
    pub share: ShareConfig,
    pub limits: Limits,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShareConfig {
    /// Page the share fragment is appended to.
    pub base_url: String,
    /// Sample used when a link carries no usable project state.
    pub default_sample: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    pub max_file_bytes: usize,
    pub max_files: usize,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_sample: DEFAULT_SAMPLE.to_string(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_bytes: MAX_FILE_BYTES,
            max_files: MAX_FILES,
        }
    }
}

impl Default for PadlinkConfig {
    fn default() -> Self {
        Self {
            share: ShareConfig::default(),
            limits: Limits::default(),
        }
    }
}

impl PadlinkConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)
            .map_err(|err| ConfigError::InvalidConfig(format!("{CONFIG_FILE}: {err}").into()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `padlink.toml` from `dir` when present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// The configured fallback sample.
    #[must_use]
    pub fn default_sample(&self) -> SampleName {
        SampleName::parse(&self.share.default_sample).unwrap_or_default()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.share.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidConfig("share.base_url is empty".into()));
        }
        if SampleName::parse(&self.share.default_sample).is_none() {
            return Err(ConfigError::InvalidConfig(
                format!("share.default_sample '{}'", self.share.default_sample).into(),
            ));
        }
        if self.limits.max_file_bytes == 0 || self.limits.max_files == 0 {
            return Err(ConfigError::InvalidConfig("limits must be non-zero".into()));
        }
        Ok(())
    }
}
