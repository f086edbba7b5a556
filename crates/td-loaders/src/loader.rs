/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Feed-to-files pipeline shared by the CLI commands

use crate::csv_processor::{CsvProcessor, FeedParse, ParseStats};
use crate::writer::{sort_records, write_csv, write_json};
use crate::LoaderResult;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use td_models::BondRecord;
use tracing::info;

/// Configuration for the bond table loader
#[derive(Debug, Clone)]
pub struct LoaderConfig {
  /// Directory receiving the generated files
  pub out_dir: PathBuf,

  /// File name of the JSON rendering
  pub json_file: String,

  /// File name of the CSV rendering
  pub csv_file: String,

  /// Create `out_dir` (and parents) when missing
  pub create_out_dir: bool,
}

impl Default for LoaderConfig {
  fn default() -> Self {
    Self {
      out_dir: PathBuf::from(td_core::DEFAULT_OUT_DIR),
      json_file: "latest.json".to_string(),
      csv_file: "latest.csv".to_string(),
      create_out_dir: true,
    }
  }
}

impl LoaderConfig {
  pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
    self.out_dir = out_dir.into();
    self
  }

  pub fn json_path(&self) -> PathBuf {
    self.out_dir.join(&self.json_file)
  }

  pub fn csv_path(&self) -> PathBuf {
    self.out_dir.join(&self.csv_file)
  }
}

/// What a completed load produced
#[derive(Debug)]
pub struct LoaderOutput {
  /// Records in published order
  pub records: Vec<BondRecord>,
  pub stats: ParseStats,
  pub json_path: PathBuf,
  pub csv_path: PathBuf,
}

/// Parses a feed, orders the instruments and publishes both renderings
pub struct BondLoader {
  config: LoaderConfig,
  processor: CsvProcessor,
}

impl BondLoader {
  pub fn new(config: LoaderConfig) -> Self {
    Self { config, processor: CsvProcessor::new() }
  }

  pub fn config(&self) -> &LoaderConfig {
    &self.config
  }

  /// Create the output directory if configured to
  pub fn prepare(&self) -> LoaderResult<()> {
    if self.config.create_out_dir {
      fs::create_dir_all(&self.config.out_dir)?;
    }
    Ok(())
  }

  /// Aggregate the feed and return the records sorted for publishing
  pub fn parse<R: Read>(&self, input: R) -> LoaderResult<FeedParse> {
    let mut parsed = self.processor.parse_feed(input)?;
    sort_records(&mut parsed.records);
    Ok(parsed)
  }

  /// Write the JSON rendering, returning its path
  pub fn publish_json(&self, records: &[BondRecord]) -> LoaderResult<PathBuf> {
    let path = self.config.json_path();
    write_json(records, &path)?;
    Ok(path)
  }

  /// Write the CSV rendering, returning its path
  pub fn publish_csv(&self, records: &[BondRecord]) -> LoaderResult<PathBuf> {
    let path = self.config.csv_path();
    write_csv(records, &path)?;
    Ok(path)
  }

  /// Run the whole pipeline
  pub fn load<R: Read>(&self, input: R) -> LoaderResult<LoaderOutput> {
    self.prepare()?;
    let FeedParse { records, stats } = self.parse(input)?;
    let json_path = self.publish_json(&records)?;
    let csv_path = self.publish_csv(&records)?;
    info!("Published {} records to {}", records.len(), display_dir(&self.config.out_dir));
    Ok(LoaderOutput { records, stats, json_path, csv_path })
  }
}

fn display_dir(dir: &Path) -> String {
  if dir.as_os_str().is_empty() {
    ".".to_string()
  } else {
    dir.display().to_string()
  }
}
