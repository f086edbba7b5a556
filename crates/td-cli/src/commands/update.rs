use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use td_client::FeedClient;
use td_loaders::{BondLoader, LoaderConfig};
use tracing::info;

use crate::config::Config;

/// Download the feed and regenerate the published files
#[derive(Args, Debug)]
pub struct UpdateCommand {
  /// URL to download the CSV from
  #[arg(long)]
  url: Option<String>,

  /// Output directory for generated files
  #[arg(long)]
  outdir: Option<PathBuf>,
}

pub async fn execute(cmd: UpdateCommand, config: Config) -> Result<usize> {
  let core_config = config.with_overrides(cmd.url.as_deref(), cmd.outdir.as_deref())?;

  let loader = BondLoader::new(LoaderConfig::default().with_out_dir(&core_config.out_dir));
  loader.prepare().context("failed to create output directory")?;

  let client = FeedClient::new(&core_config)?;
  info!("Updating {} from {}", core_config.out_dir.display(), client.source_url());
  let body = client.fetch_feed().await.context("failed to download CSV")?;

  super::publish(&loader, body.as_slice())
}
