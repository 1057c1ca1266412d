use crate::constants::{DEFAULT_CONFIG_PATH, DEFAULT_TIMEOUT, DEFAULT_TRANSFER_BUFFER_SIZE};
use crate::core_error::FtpError;
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Connect/read/write timeout applied to both control and data connections.
    pub timeout_secs: Option<u64>,
    /// Chunk size used when streaming an upload.
    pub transfer_buffer_size: Option<usize>,
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
}

/// Settings a single `FtpSession` runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub timeout: Duration,
    pub buffer_size: usize,
    pub verbose: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: Some(DEFAULT_TIMEOUT.as_secs()),
            transfer_buffer_size: Some(DEFAULT_TRANSFER_BUFFER_SIZE),
            verbose: Some(false),
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            buffer_size: DEFAULT_TRANSFER_BUFFER_SIZE,
            verbose: false,
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse configuration")?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Loads the explicit file when given; otherwise the system-wide file if it exists,
    /// falling back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.is_file() {
                    Self::load_from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

impl ClientConfig {
    /// Builds the per-session settings; `--verbose` on the command line forces verbose mode on.
    pub fn session_options(&self, verbose: bool) -> Result<SessionOptions, FtpError> {
        let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT.as_secs());
        if timeout_secs == 0 {
            return Err(FtpError::InvalidArguments(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        let buffer_size = self
            .transfer_buffer_size
            .unwrap_or(DEFAULT_TRANSFER_BUFFER_SIZE);
        if buffer_size == 0 {
            return Err(FtpError::InvalidArguments(
                "transfer_buffer_size must be greater than 0".to_string(),
            ));
        }

        Ok(SessionOptions {
            timeout: Duration::from_secs(timeout_secs),
            buffer_size,
            verbose: verbose || self.verbose.unwrap_or(false),
        })
    }
}
