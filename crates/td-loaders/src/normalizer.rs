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

//! Converts one raw feed row into a [`BondRecord`]

use crate::csv_processor::FEED_COLUMNS;
use crate::{LoaderError, LoaderResult};
use csv::StringRecord;
use td_core::{parse_br_date, parse_br_decimal};
use td_models::{BondNaming, BondRecord};

/// Decode the dates and decimals of a row and derive the bond name.
///
/// Rows shorter than the eight feed columns are filtered out by the caller;
/// they are rejected here as invalid data. The start date is set to the
/// row's own quotation date until the aggregator replaces it.
pub fn normalize_row(row: &StringRecord) -> LoaderResult<BondRecord> {
  if row.len() < FEED_COLUMNS.len() {
    return Err(LoaderError::InvalidData(format!(
      "expected {} columns, got {}",
      FEED_COLUMNS.len(),
      row.len()
    )));
  }

  let instrument_type = row[0].trim().to_string();

  let maturity_date =
    parse_br_date(&row[1]).map_err(|e| LoaderError::field(FEED_COLUMNS[1], e))?;
  let quotation_date =
    parse_br_date(&row[2]).map_err(|e| LoaderError::field(FEED_COLUMNS[2], e))?;

  let decimal = |index: usize| -> LoaderResult<f64> {
    parse_br_decimal(&row[index]).map_err(|e| LoaderError::field(FEED_COLUMNS[index], e))
  };
  let buy_rate = decimal(3)?;
  let sell_rate = decimal(4)?;
  let buy_price = decimal(5)?;
  let sell_price = decimal(6)?;
  let base_price = decimal(7)?;

  let BondNaming { name, conversion_date } =
    BondNaming::derive(&instrument_type, Some(maturity_date));

  Ok(BondRecord {
    name,
    start_date: quotation_date,
    conversion_date,
    maturity_date,
    quotation_date,
    buy_rate,
    sell_rate,
    buy_price,
    sell_price,
    base_price,
    instrument_type,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;
  use td_core::test_utils::assert_approx_eq;

  fn row(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
  }

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn test_valid_record() {
    let record = normalize_row(&row(&[
      "Tesouro IPCA+",
      "15/05/2035",
      "22/12/2025",
      "7,29",
      "7,41",
      "2374,37",
      "2348,76",
      "2348,76",
    ]))
    .unwrap();

    assert_eq!(record.instrument_type, "Tesouro IPCA+");
    assert_eq!(record.name, "Tesouro IPCA+ 2035");
    assert_eq!(record.maturity_date, date(2035, 5, 15));
    assert_eq!(record.quotation_date, date(2025, 12, 22));
    assert_eq!(record.start_date, date(2025, 12, 22));
    assert_eq!(record.conversion_date, None);
    assert_approx_eq(record.buy_rate, 7.29, 1e-9);
    assert_approx_eq(record.sell_rate, 7.41, 1e-9);
    assert_approx_eq(record.buy_price, 2374.37, 1e-9);
    assert_approx_eq(record.sell_price, 2348.76, 1e-9);
    assert_approx_eq(record.base_price, 2348.76, 1e-9);
  }

  #[test]
  fn test_type_is_trimmed_and_blank_decimals_are_zero() {
    let record = normalize_row(&row(&[
      "  Tesouro Selic  ",
      "01/03/2029",
      "02/01/2025",
      "",
      "0,03",
      "1.234,56",
      " ",
      "15.432,10",
    ]))
    .unwrap();

    assert_eq!(record.instrument_type, "Tesouro Selic");
    assert_eq!(record.name, "Tesouro Selic 2029");
    assert_eq!(record.buy_rate, 0.0);
    assert_eq!(record.sell_price, 0.0);
    assert_approx_eq(record.buy_price, 1234.56, 1e-9);
    assert_approx_eq(record.base_price, 15432.10, 1e-9);
  }

  #[test]
  fn test_renda_aposentadoria_extra_record() {
    let record = normalize_row(&row(&[
      "Tesouro Renda+ Aposentadoria Extra",
      "15/12/2069",
      "22/12/2025",
      "6,90",
      "7,02",
      "1043,21",
      "1030,55",
      "1030,55",
    ]))
    .unwrap();

    assert_eq!(record.name, "Tesouro Renda+ Aposentadoria Extra 2050");
    assert_eq!(record.conversion_date, Some(date(2050, 1, 15)));
    assert_eq!(record.maturity_date, date(2069, 12, 15));
  }

  #[test]
  fn test_educa_record() {
    let record = normalize_row(&row(&[
      "Tesouro Educa+",
      "15/12/2034",
      "22/12/2025",
      "5,36",
      "5,48",
      "2587,63",
      "2556,12",
      "2556,12",
    ]))
    .unwrap();

    assert_eq!(record.name, "Tesouro Educa+ 2030");
    assert_eq!(record.conversion_date, Some(date(2030, 1, 15)));
  }

  #[test]
  fn test_errors_name_the_failing_field() {
    let base = [
      "Tesouro IPCA+",
      "15/05/2035",
      "22/12/2025",
      "7,29",
      "7,41",
      "2374,37",
      "2348,76",
      "2348,76",
    ];

    let cases = [(1, "invalid", "Data Vencimento"), (2, "", "Data Base"), (5, "abc", "PU Compra Manha")];
    for (index, value, expected_field) in cases {
      let mut fields = base;
      fields[index] = value;
      match normalize_row(&row(&fields)) {
        Err(LoaderError::FieldFormat { field, .. }) => assert_eq!(field, expected_field),
        other => panic!("expected field error for {}, got {:?}", expected_field, other),
      }
    }
  }

  #[test]
  fn test_short_row_is_invalid() {
    let err = normalize_row(&row(&["Tesouro IPCA+", "15/05/2035"])).unwrap_err();
    assert!(matches!(err, LoaderError::InvalidData(_)));
  }
}
