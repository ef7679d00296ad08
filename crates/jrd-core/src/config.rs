use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::endpoints::{Endpoints, DEFAULT_BLOB_BASE, DEFAULT_FISHERY_BASE};
use crate::retry::RetryPolicy;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Linear backoff step in seconds: retry k waits `k * backoff_step_secs`.
    pub backoff_step_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            backoff_step_secs: 5,
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            backoff_step: Duration::from_secs(self.backoff_step_secs),
        }
    }
}

/// Endpoint overrides (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Base of the metadata and existence-probe endpoints.
    pub fishery_base: String,
    /// Base of the storage bucket holding the rendered animations.
    pub blob_base: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            fishery_base: DEFAULT_FISHERY_BASE.to_string(),
            blob_base: DEFAULT_BLOB_BASE.to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/jrd/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JrdConfig {
    /// Directory the animations are written to (relative paths resolve against the cwd).
    pub output_dir: PathBuf,
    /// Overall per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
    /// Optional endpoint overrides; if missing, the public service is used.
    #[serde(default)]
    pub endpoints: Option<EndpointConfig>,
}

impl Default for JrdConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            request_timeout_secs: 60,
            connect_timeout_secs: 15,
            retry: None,
            endpoints: None,
        }
    }
}

impl JrdConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry.clone().unwrap_or_default().policy()
    }

    /// Endpoints to use, validated. Falls back to the public service when no override is set.
    pub fn endpoints(&self) -> Result<Endpoints> {
        match &self.endpoints {
            None => Ok(Endpoints::default()),
            Some(e) => Endpoints::new(&e.fishery_base, &e.blob_base)
                .context("invalid [endpoints] in config"),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("jrd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<JrdConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = JrdConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: JrdConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
