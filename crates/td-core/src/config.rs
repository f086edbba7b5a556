//! Configuration management for the feed updater

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use url::Url;

/// Main configuration struct for the feed updater
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// URL of the semicolon-delimited price/rate feed
  pub source_url: String,

  /// Directory receiving `latest.json` and `latest.csv`
  pub out_dir: PathBuf,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Maximum retries for failed downloads
  pub max_retries: u32,

  /// User agent sent to the feed server
  pub user_agent: String,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      source_url: crate::DEFAULT_SOURCE_URL.to_string(),
      out_dir: PathBuf::from(crate::DEFAULT_OUT_DIR),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      max_retries: crate::DEFAULT_MAX_RETRIES,
      user_agent: crate::USER_AGENT.to_string(),
    }
  }
}

impl Config {
  /// Load configuration from environment variables (and `.env` when present)
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Build a configuration from an arbitrary key lookup; unset keys fall back to defaults
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = Config::default();

    let source_url = lookup("TD_SOURCE_URL").unwrap_or(defaults.source_url);
    Url::parse(&source_url)
      .map_err(|e| Error::Config(format!("Invalid TD_SOURCE_URL {}: {}", source_url, e)))?;

    let out_dir = lookup("TD_OUT_DIR").map(PathBuf::from).unwrap_or(defaults.out_dir);

    let timeout_secs = match lookup("TD_TIMEOUT_SECS") {
      Some(value) => {
        value.parse().map_err(|_| Error::Config("Invalid TD_TIMEOUT_SECS".to_string()))?
      }
      None => defaults.timeout_secs,
    };

    let max_retries = match lookup("TD_MAX_RETRIES") {
      Some(value) => {
        value.parse().map_err(|_| Error::Config("Invalid TD_MAX_RETRIES".to_string()))?
      }
      None => defaults.max_retries,
    };

    Ok(Config { source_url, out_dir, timeout_secs, max_retries, user_agent: defaults.user_agent })
  }

  /// Replace the source URL, validating it first
  pub fn with_source_url(mut self, source_url: impl Into<String>) -> Result<Self> {
    let source_url = source_url.into();
    Url::parse(&source_url)
      .map_err(|e| Error::Config(format!("Invalid source URL {}: {}", source_url, e)))?;
    self.source_url = source_url;
    Ok(self)
  }

  /// Replace the output directory
  pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
    self.out_dir = out_dir.into();
    self
  }
}
