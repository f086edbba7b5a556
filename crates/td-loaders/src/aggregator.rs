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

//! Folds the quotation rows of each instrument into a single record.
//!
//! The feed carries one row per bond per quotation date. For every
//! [`InstrumentKey`] the aggregator keeps the row with the latest quotation
//! date, replacing it wholesale when a row with the same or a later date
//! shows up, and separately remembers the earliest quotation date so it can
//! become the record's start date.

use chrono::NaiveDate;
use std::collections::HashMap;
use td_models::{BondRecord, InstrumentKey};
use tracing::debug;

/// Running state for one instrument
#[derive(Debug, Clone)]
struct AggregationEntry {
  latest: NaiveDate,
  earliest: NaiveDate,
  record: BondRecord,
}

impl AggregationEntry {
  fn new(record: BondRecord) -> Self {
    Self { latest: record.quotation_date, earliest: record.quotation_date, record }
  }

  fn absorb(&mut self, record: BondRecord) {
    let quoted = record.quotation_date;
    if quoted < self.earliest {
      self.earliest = quoted;
    }
    // Equal dates go to the row seen last
    if quoted >= self.latest {
      self.latest = quoted;
      self.record = record;
    }
  }

  fn finish(self) -> BondRecord {
    BondRecord { start_date: self.earliest, ..self.record }
  }
}

#[derive(Debug, Default)]
pub struct BondAggregator {
  entries: HashMap<InstrumentKey, AggregationEntry>,
}

impl BondAggregator {
  pub fn new() -> Self {
    Self::default()
  }

  /// Fold one normalized row into its instrument. Rows must arrive in feed order.
  pub fn ingest(&mut self, record: BondRecord) {
    let key = record.key();
    match self.entries.get_mut(&key) {
      Some(entry) => entry.absorb(record),
      None => {
        debug!("New instrument {}", key);
        self.entries.insert(key, AggregationEntry::new(record));
      }
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Current record for an instrument, with its start date already applied
  pub fn get(&self, key: &InstrumentKey) -> Option<BondRecord> {
    self.entries.get(key).map(|entry| entry.clone().finish())
  }

  /// One record per instrument, in no particular order
  pub fn finish(self) -> Vec<BondRecord> {
    self.entries.into_values().map(AggregationEntry::finish).collect()
  }
}
