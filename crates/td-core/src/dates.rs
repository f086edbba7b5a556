//! `dd/mm/yyyy` feed dates and their ISO `yyyy-mm-dd` rendering.

use crate::error::{Error, Result};
use chrono::NaiveDate;

const BR_FORMAT: &str = "%d/%m/%Y";
const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parse a `dd/mm/yyyy` date. Day and month are two digits, the year four.
pub fn parse_br_date(text: &str) -> Result<NaiveDate> {
  let trimmed = text.trim();
  if trimmed.is_empty() {
    return Err(Error::EmptyDate);
  }

  if !has_shape(trimmed, b'/', [2, 5]) {
    return Err(Error::InvalidDate {
      input: trimmed.to_string(),
      reason: "expected dd/mm/yyyy".to_string(),
    });
  }

  NaiveDate::parse_from_str(trimmed, BR_FORMAT)
    .map_err(|e| Error::InvalidDate { input: trimmed.to_string(), reason: e.to_string() })
}

/// Parse an ISO `yyyy-mm-dd` date, as written to the output files.
pub fn parse_iso_date(text: &str) -> Result<NaiveDate> {
  let trimmed = text.trim();
  if !has_shape(trimmed, b'-', [4, 7]) {
    return Err(Error::InvalidDate {
      input: trimmed.to_string(),
      reason: "expected yyyy-mm-dd".to_string(),
    });
  }
  Ok(NaiveDate::parse_from_str(trimmed, ISO_FORMAT)?)
}

pub fn format_iso_date(date: NaiveDate) -> String {
  date.format(ISO_FORMAT).to_string()
}

pub fn format_br_date(date: NaiveDate) -> String {
  date.format(BR_FORMAT).to_string()
}

/// Ten ASCII bytes, digits everywhere except `sep` at the two given offsets.
fn has_shape(text: &str, sep: u8, seps_at: [usize; 2]) -> bool {
  let bytes = text.as_bytes();
  bytes.len() == 10
    && bytes.iter().enumerate().all(|(i, b)| {
      if seps_at.contains(&i) {
        *b == sep
      } else {
        b.is_ascii_digit()
      }
    })
}
