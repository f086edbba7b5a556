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

//! Ordering and the two published renderings of the bond table.
//!
//! Both writers go through a temporary file next to the destination that is
//! renamed over it once fully written and synced. If anything fails the
//! temporary file is removed and the destination keeps its previous content.

use crate::LoaderResult;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};
use td_core::{format_br_decimal, format_iso_date};
use td_models::BondRecord;
use tracing::info;

/// Header of the published CSV
pub const CSV_HEADER: [&str; 10] = [
  "Nome",
  "Data Inicio",
  "Data Conversao",
  "Data Vencimento",
  "Data Base",
  "Taxa Compra Manha",
  "Taxa Venda Manha",
  "PU Compra Manha",
  "PU Venda Manha",
  "PU Base Manha",
];

/// Order by name, then maturity date. Stable for equal keys.
pub fn sort_records(records: &mut [BondRecord]) {
  records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.maturity_date.cmp(&b.maturity_date)));
}

/// Write the records as a pretty-printed JSON array
///
/// Whole numbers keep a fractional part (`2376.0`, not `2376`). Parsers read
/// both forms as the same value, but a byte-for-byte comparison will differ.
pub fn write_json(records: &[BondRecord], path: &Path) -> LoaderResult<()> {
  write_atomically(path, |file| {
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
  })?;
  info!("Wrote {} records to {}", records.len(), path.display());
  Ok(())
}

/// Write the records as a `;`-delimited table with pt-BR decimals
pub fn write_csv(records: &[BondRecord], path: &Path) -> LoaderResult<()> {
  write_atomically(path, |file| {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    writer.write_record(CSV_HEADER)?;

    for record in records {
      writer.write_record([
        record.name.clone(),
        format_iso_date(record.start_date),
        record.conversion_date.map(format_iso_date).unwrap_or_default(),
        format_iso_date(record.maturity_date),
        format_iso_date(record.quotation_date),
        format_br_decimal(record.buy_rate),
        format_br_decimal(record.sell_rate),
        format_br_decimal(record.buy_price),
        format_br_decimal(record.sell_price),
        format_br_decimal(record.base_price),
      ])?;
    }

    writer.flush()?;
    Ok(())
  })?;
  info!("Wrote {} records to {}", records.len(), path.display());
  Ok(())
}

/// Render into a sibling temporary file, sync it and rename it over `path`
pub(crate) fn write_atomically<F>(path: &Path, render: F) -> LoaderResult<()>
where
  F: FnOnce(&mut std::fs::File) -> LoaderResult<()>,
{
  let dir = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };
  let prefix = match path.file_name() {
    Some(name) => format!(".{}.", name.to_string_lossy()),
    None => ".td-output.".to_string(),
  };

  let mut tmp: NamedTempFile = Builder::new().prefix(&prefix).suffix(".tmp").tempfile_in(dir)?;
  render(tmp.as_file_mut())?;
  tmp.as_file().sync_all()?;
  tmp.persist(path)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::LoaderError;
  use chrono::NaiveDate;
  use std::fs;
  use td_core::test_utils::assert_approx_eq;
  use tempfile::tempdir;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn record(name: &str, maturity: NaiveDate) -> BondRecord {
    BondRecord {
      name: name.to_string(),
      start_date: date(2024, 12, 22),
      conversion_date: None,
      maturity_date: maturity,
      quotation_date: date(2025, 12, 22),
      buy_rate: 7.29,
      sell_rate: 7.41,
      buy_price: 2374.37,
      sell_price: 2348.76,
      base_price: 1000.0,
      instrument_type: name.to_string(),
    }
  }

  fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
      .unwrap()
      .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
      .collect();
    names.sort();
    names
  }

  #[test]
  fn test_sort_by_name_then_maturity() {
    let m1 = date(2035, 5, 15);
    let m2 = date(2035, 5, 20);
    let mut records = vec![record("B", m1), record("A", m2), record("A", m1)];
    sort_records(&mut records);

    let order: Vec<(&str, NaiveDate)> =
      records.iter().map(|r| (r.name.as_str(), r.maturity_date)).collect();
    assert_eq!(order, vec![("A", m1), ("A", m2), ("B", m1)]);
  }

  #[test]
  fn test_sort_mixed_names() {
    let mut records = vec![
      record("Tesouro IPCA+ 2035", date(2035, 5, 15)),
      record("Tesouro Selic 2010", date(2010, 3, 17)),
      record("Tesouro IPCA+ 2035", date(2035, 5, 20)),
      record("Tesouro Prefixado 2008", date(2008, 1, 1)),
    ];
    sort_records(&mut records);

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
      names,
      vec!["Tesouro IPCA+ 2035", "Tesouro IPCA+ 2035", "Tesouro Prefixado 2008", "Tesouro Selic 2010"]
    );
    assert_eq!(records[0].maturity_date, date(2035, 5, 15));
  }

  #[test]
  fn test_write_json_is_pretty_and_complete() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latest.json");
    let mut educa = record("Tesouro Educa+ 2030", date(2034, 12, 15));
    educa.conversion_date = Some(date(2030, 1, 15));

    write_json(&[educa.clone()], &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("[\n  {\n    \"nome\": \"Tesouro Educa+ 2030\""));
    assert!(text.ends_with("]\n"));
    assert!(!text.contains("instrument_type"));

    let back: Vec<BondRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].conversion_date, Some(date(2030, 1, 15)));
    assert_approx_eq(back[0].buy_price, educa.buy_price, 1e-9);
    assert_eq!(entries(dir.path()), vec!["latest.json"]);
  }

  #[test]
  fn test_write_json_whole_numbers_keep_fraction() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latest.json");
    write_json(&[record("Tesouro Selic 2029", date(2029, 3, 1))], &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"pu_base_manha\": 1000.0"));
  }

  #[test]
  fn test_write_csv_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latest.csv");
    write_csv(&[record("Tesouro IPCA+ 2035", date(2035, 5, 15))], &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
      lines[0],
      "Nome;Data Inicio;Data Conversao;Data Vencimento;Data Base;Taxa Compra Manha;Taxa Venda Manha;PU Compra Manha;PU Venda Manha;PU Base Manha"
    );
    assert_eq!(
      lines[1],
      "Tesouro IPCA+ 2035;2024-12-22;;2035-05-15;2025-12-22;7,29;7,41;2374,37;2348,76;1000"
    );
    assert_eq!(lines.len(), 2);
    assert_eq!(entries(dir.path()), vec!["latest.csv"]);
  }

  #[test]
  fn test_failed_render_keeps_previous_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latest.csv");
    fs::write(&path, "previous").unwrap();

    let result = write_atomically(&path, |file| {
      file.write_all(b"partial")?;
      Err(LoaderError::IoError("No space left on device".to_string()))
    });

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
    assert_eq!(entries(dir.path()), vec!["latest.csv"]);
  }

  #[test]
  fn test_failed_render_leaves_no_destination() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latest.json");

    let result = write_atomically(&path, |_| Err(LoaderError::IoError("disk full".to_string())));

    assert!(result.is_err());
    assert!(!path.exists());
    assert!(entries(dir.path()).is_empty());
  }

  #[test]
  fn test_failed_rename_cleans_up() {
    let dir = tempdir().unwrap();
    // A non-empty directory cannot be replaced by a file
    let path = dir.path().join("latest.json");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep"), "x").unwrap();

    let err = write_json(&[record("A", date(2030, 1, 1))], &path).unwrap_err();

    assert!(matches!(err, LoaderError::IoError(_)));
    assert!(path.is_dir());
    assert_eq!(entries(dir.path()), vec!["latest.json"]);
  }

  #[test]
  fn test_missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("latest.csv");
    assert!(matches!(write_csv(&[], &path), Err(LoaderError::IoError(_))));
  }
}
