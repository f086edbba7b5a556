//! pt-BR decimal numbers: `.` groups thousands and `,` marks the decimals.
//!
//! The feed publishes values such as `1.234,56` or `7,29`. Parsing strips the
//! grouping dots before swapping the decimal comma, so `1.234,56` becomes
//! `1234.56`. Formatting goes the other way but never emits grouping dots.

use crate::error::{Error, Result};

/// Parse a pt-BR formatted decimal. Blank input is read as zero.
pub fn parse_br_decimal(text: &str) -> Result<f64> {
  let trimmed = text.trim();
  if trimmed.is_empty() {
    return Ok(0.0);
  }

  let cleaned = trimmed.replace('.', "").replace(',', ".");

  // f64::from_str accepts "inf", "NaN" and exponents, none of which the feed uses
  if cleaned.chars().any(|c| c.is_alphabetic()) {
    return Err(Error::InvalidNumber(trimmed.to_string()));
  }

  match cleaned.parse::<f64>() {
    Ok(value) if value.is_finite() => Ok(value),
    _ => Err(Error::InvalidNumber(trimmed.to_string())),
  }
}

/// Format a decimal with the shortest representation that reads back to the
/// same value, using `,` as the decimal separator.
pub fn format_br_decimal(value: f64) -> String {
  value.to_string().replace('.', ",")
}
