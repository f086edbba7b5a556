/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
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

//! Aggregated bond record as published in `latest.json` / `latest.csv`

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One bond instrument with the prices of its most recent quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondRecord {
  /// Type plus conversion or maturity year, e.g. "Tesouro IPCA+ 2035"
  #[serde(rename = "nome")]
  pub name: String,

  /// Oldest quotation date seen for the instrument
  #[serde(rename = "data_inicio")]
  pub start_date: NaiveDate,

  /// Conversion date, only for Renda+ Aposentadoria Extra and Educa+
  #[serde(rename = "data_conversao", with = "blank_date", default)]
  pub conversion_date: Option<NaiveDate>,

  #[serde(rename = "data_vencimento")]
  pub maturity_date: NaiveDate,

  /// Date of the quotation the prices below belong to
  #[serde(rename = "data_base")]
  pub quotation_date: NaiveDate,

  #[serde(rename = "taxa_compra_manha")]
  pub buy_rate: f64,

  #[serde(rename = "taxa_venda_manha")]
  pub sell_rate: f64,

  #[serde(rename = "pu_compra_manha")]
  pub buy_price: f64,

  #[serde(rename = "pu_venda_manha")]
  pub sell_price: f64,

  #[serde(rename = "pu_base_manha")]
  pub base_price: f64,

  /// Raw type code, only used to group rows
  #[serde(skip)]
  pub instrument_type: String,
}

impl BondRecord {
  pub fn key(&self) -> InstrumentKey {
    InstrumentKey::new(&self.instrument_type, self.maturity_date)
  }
}

/// Identity of a bond instrument independent of quotation date
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstrumentKey {
  pub instrument_type: String,
  pub maturity_date: NaiveDate,
}

impl InstrumentKey {
  pub fn new(instrument_type: &str, maturity_date: NaiveDate) -> Self {
    Self { instrument_type: instrument_type.trim().to_string(), maturity_date }
  }
}

impl fmt::Display for InstrumentKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}|{}", self.instrument_type, td_core::format_iso_date(self.maturity_date))
  }
}

/// `Option<NaiveDate>` written as an ISO date, or `""` when absent
mod blank_date {
  use chrono::NaiveDate;
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match date {
      Some(date) => serializer.serialize_str(&td_core::format_iso_date(*date)),
      None => serializer.serialize_str(""),
    }
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
  where
    D: Deserializer<'de>,
  {
    let text = String::deserialize(deserializer)?;
    if text.trim().is_empty() {
      return Ok(None);
    }
    td_core::parse_iso_date(&text).map(Some).map_err(serde::de::Error::custom)
  }
}
