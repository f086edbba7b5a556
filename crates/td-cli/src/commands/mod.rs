pub mod convert;
pub mod update;

use anyhow::{Context, Result};
use std::io::Read;
use td_loaders::BondLoader;
use tracing::info;

/// Parse a feed and write both renderings, returning the number of records
pub(crate) fn publish<R: Read>(loader: &BondLoader, input: R) -> Result<usize> {
  let parsed = loader.parse(input).context("failed to parse CSV")?;

  let json_path = loader.publish_json(&parsed.records).context("failed to write JSON")?;
  let csv_path = loader.publish_csv(&parsed.records).context("failed to write CSV")?;
  info!("Wrote {} and {}", json_path.display(), csv_path.display());

  println!("Successfully processed {} records", parsed.records.len());
  Ok(parsed.records.len())
}
