use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use td_loaders::{BondLoader, LoaderConfig};

use crate::config::Config;

/// Regenerate the published files from a feed already on disk
#[derive(Args, Debug)]
pub struct ConvertCommand {
  /// Path to a downloaded feed CSV
  #[arg(short, long)]
  input: PathBuf,

  /// Output directory for generated files
  #[arg(long)]
  outdir: Option<PathBuf>,
}

pub fn execute(cmd: ConvertCommand, config: Config) -> Result<usize> {
  let core_config = config.with_overrides(None, cmd.outdir.as_deref())?;

  let loader = BondLoader::new(LoaderConfig::default().with_out_dir(&core_config.out_dir));
  loader.prepare().context("failed to create output directory")?;

  let file = File::open(&cmd.input)
    .with_context(|| format!("failed to open {}", cmd.input.display()))?;

  super::publish(&loader, BufReader::new(file))
}
