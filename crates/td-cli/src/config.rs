use anyhow::{Context, Result};
use std::path::Path;
use td_core::Config as CoreConfig;

#[derive(Debug, Clone)]
pub struct Config {
  pub core_config: CoreConfig,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    let core_config = CoreConfig::from_env().context("invalid TD_* environment configuration")?;
    Ok(Self { core_config })
  }

  /// Core configuration with the command-line flags applied on top
  pub fn with_overrides(&self, url: Option<&str>, out_dir: Option<&Path>) -> Result<CoreConfig> {
    let mut core_config = self.core_config.clone();
    if let Some(url) = url {
      core_config = core_config.with_source_url(url).context("invalid --url")?;
    }
    if let Some(out_dir) = out_dir {
      core_config = core_config.with_out_dir(out_dir);
    }
    Ok(core_config)
  }
}
