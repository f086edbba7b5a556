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

//! CSV processor for the Tesouro Direto price/rate feed
//!
//! The feed is `;`-delimited with a header row:
//!
//! ```text
//! Tipo Titulo;Data Vencimento;Data Base;Taxa Compra Manha;Taxa Venda Manha;PU Compra Manha;PU Venda Manha;PU Base Manha
//! Tesouro IPCA+;15/05/2035;22/12/2025;7,29;7,41;2374,37;2348,76;2348,76
//! ```
//!
//! The processor is tolerant of the feed's quirks: a UTF-8 BOM in front of the
//! header, short rows, and the occasional row with an unparseable value. Only
//! a header with too few columns or an unreadable stream aborts the parse.

use crate::aggregator::BondAggregator;
use crate::normalizer::normalize_row;
use crate::{LoaderError, LoaderResult};
use csv::{ByteRecord, ReaderBuilder, StringRecord};
use std::io::Read;
use td_models::BondRecord;
use tracing::{debug, info, warn};

/// Columns the feed is expected to start with, in order
pub const FEED_COLUMNS: [&str; 8] = [
  "Tipo Titulo",
  "Data Vencimento",
  "Data Base",
  "Taxa Compra Manha",
  "Taxa Venda Manha",
  "PU Compra Manha",
  "PU Venda Manha",
  "PU Base Manha",
];

const BOM: char = '\u{feff}';

/// Row counters collected while reading a feed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseStats {
  /// Data rows read after the header
  pub rows_read: usize,
  /// Rows with fewer than eight fields, skipped silently
  pub short_rows: usize,
  /// Rows whose values failed to decode
  pub rejected_rows: usize,
  /// Distinct instruments produced
  pub instruments: usize,
}

#[derive(Debug)]
pub struct FeedParse {
  pub records: Vec<BondRecord>,
  pub stats: ParseStats,
}

#[derive(Debug, Default)]
pub struct CsvProcessor;

impl CsvProcessor {
  pub fn new() -> Self {
    Self
  }

  /// Read the whole feed and aggregate it to one record per instrument.
  ///
  /// Records come back unordered; see [`crate::writer::sort_records`].
  pub fn parse_feed<R: Read>(&self, input: R) -> LoaderResult<FeedParse> {
    let mut reader =
      ReaderBuilder::new().delimiter(b';').has_headers(false).flexible(true).from_reader(input);
    let mut rows = reader.byte_records();

    let header = match rows.next() {
      Some(header) => decode_row(header?),
      None => return Err(LoaderError::InvalidData("feed is empty, missing header".to_string())),
    };
    check_header(&header)?;

    let mut aggregator = BondAggregator::new();
    let mut stats = ParseStats::default();

    for result in rows {
      let raw = result?;
      stats.rows_read += 1;

      if raw.len() < FEED_COLUMNS.len() {
        stats.short_rows += 1;
        continue;
      }

      let line = raw.position().map(|p| p.line()).unwrap_or_default();
      let row = decode_row(raw);
      match normalize_row(&row) {
        Ok(record) => aggregator.ingest(record),
        Err(e) => {
          warn!("Skipping line {}: {}", line, e);
          stats.rejected_rows += 1;
        }
      }
    }

    stats.instruments = aggregator.len();
    info!(
      "Read {} rows into {} instruments ({} short, {} rejected)",
      stats.rows_read, stats.instruments, stats.short_rows, stats.rejected_rows
    );

    Ok(FeedParse { records: aggregator.finish(), stats })
  }
}

/// Parse a feed into its finalized, unordered instrument records
pub fn parse_feed<R: Read>(input: R) -> LoaderResult<Vec<BondRecord>> {
  CsvProcessor::new().parse_feed(input).map(|parsed| parsed.records)
}

/// Decode a raw row, replacing bytes that are not UTF-8
fn decode_row(raw: ByteRecord) -> StringRecord {
  if raw.iter().any(|field| std::str::from_utf8(field).is_err()) {
    let line = raw.position().map(|p| p.line()).unwrap_or_default();
    warn!("Line {} is not valid UTF-8, replacing undecodable bytes", line);
  }
  StringRecord::from_byte_record_lossy(raw)
}

fn check_header(header: &StringRecord) -> LoaderResult<()> {
  if header.len() < FEED_COLUMNS.len() {
    return Err(LoaderError::HeaderTooShort { got: header.len(), expected: FEED_COLUMNS.len() });
  }

  for (index, expected) in FEED_COLUMNS.iter().enumerate() {
    let mut found = &header[index];
    if index == 0 {
      found = found.trim_start_matches(BOM);
    }
    if found != *expected {
      warn!("Unexpected header column {}: found {:?}, expected {:?}", index + 1, found, expected);
    }
  }

  if header.len() > FEED_COLUMNS.len() {
    debug!("Ignoring {} extra header columns", header.len() - FEED_COLUMNS.len());
  }
  Ok(())
}
