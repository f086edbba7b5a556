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

//! Bond families with their own naming rules.
//!
//! Most bonds are named after their maturity year. Renda+ Aposentadoria Extra
//! and Educa+ pay out over several years ending at maturity, so they are known
//! by the year payments start instead. That year is also the year of the
//! conversion date, which always falls on January 15.

use chrono::{Datelike, NaiveDate};

/// Day of the year (January 15) on which conversion happens
const CONVERSION_MONTH: u32 = 1;
const CONVERSION_DAY: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentFamily {
  /// "Tesouro Renda+ Aposentadoria Extra": converts 19 years before maturity
  RendaAposentadoriaExtra,
  /// "Tesouro Educa+": converts 4 years before maturity
  Educa,
  /// Every other bond type
  Standard,
}

impl InstrumentFamily {
  pub const RENDA_APOSENTADORIA_EXTRA: &'static str = "Tesouro Renda+ Aposentadoria Extra";
  pub const EDUCA: &'static str = "Tesouro Educa+";

  /// Classify a trimmed instrument type code
  pub fn from_type(instrument_type: &str) -> Self {
    match instrument_type {
      Self::RENDA_APOSENTADORIA_EXTRA => InstrumentFamily::RendaAposentadoriaExtra,
      Self::EDUCA => InstrumentFamily::Educa,
      _ => InstrumentFamily::Standard,
    }
  }

  /// Years between the conversion date and maturity, if the family converts
  pub fn conversion_offset_years(&self) -> Option<i32> {
    match self {
      InstrumentFamily::RendaAposentadoriaExtra => Some(19),
      InstrumentFamily::Educa => Some(4),
      InstrumentFamily::Standard => None,
    }
  }

  pub fn conversion_date(&self, maturity: NaiveDate) -> Option<NaiveDate> {
    let offset = self.conversion_offset_years()?;
    NaiveDate::from_ymd_opt(maturity.year() - offset, CONVERSION_MONTH, CONVERSION_DAY)
  }
}

/// Display name and conversion date derived for one instrument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BondNaming {
  pub name: String,
  pub conversion_date: Option<NaiveDate>,
}

impl BondNaming {
  /// Derive the naming of an instrument.
  ///
  /// The name is the type followed by the conversion year for converting
  /// families, or the maturity year otherwise. Without a maturity date the
  /// name is the bare type.
  pub fn derive(instrument_type: &str, maturity: Option<NaiveDate>) -> Self {
    let Some(maturity) = maturity else {
      return BondNaming { name: instrument_type.to_string(), conversion_date: None };
    };

    let family = InstrumentFamily::from_type(instrument_type);
    let conversion_date = family.conversion_date(maturity);
    let year = conversion_date.map(|d| d.year()).unwrap_or_else(|| maturity.year());

    BondNaming { name: format!("{} {:04}", instrument_type, year), conversion_date }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn test_family_from_type() {
    assert_eq!(
      InstrumentFamily::from_type("Tesouro Renda+ Aposentadoria Extra"),
      InstrumentFamily::RendaAposentadoriaExtra
    );
    assert_eq!(InstrumentFamily::from_type("Tesouro Educa+"), InstrumentFamily::Educa);
    assert_eq!(InstrumentFamily::from_type("Tesouro IPCA+"), InstrumentFamily::Standard);
    // Exact match only
    assert_eq!(InstrumentFamily::from_type("tesouro educa+"), InstrumentFamily::Standard);
  }

  #[test]
  fn test_renda_aposentadoria_extra_naming() {
    let naming = BondNaming::derive("Tesouro Renda+ Aposentadoria Extra", Some(date(2069, 12, 15)));
    assert_eq!(naming.name, "Tesouro Renda+ Aposentadoria Extra 2050");
    assert_eq!(naming.conversion_date, Some(date(2050, 1, 15)));
  }

  #[test]
  fn test_educa_naming() {
    let naming = BondNaming::derive("Tesouro Educa+", Some(date(2034, 12, 15)));
    assert_eq!(naming.name, "Tesouro Educa+ 2030");
    assert_eq!(naming.conversion_date, Some(date(2030, 1, 15)));

    let naming = BondNaming::derive("Tesouro Educa+", Some(date(2039, 12, 15)));
    assert_eq!(naming.name, "Tesouro Educa+ 2035");
    assert_eq!(naming.conversion_date, Some(date(2035, 1, 15)));
  }

  #[test]
  fn test_standard_naming_uses_maturity_year() {
    let naming = BondNaming::derive("Tesouro IPCA+", Some(date(2035, 5, 15)));
    assert_eq!(naming.name, "Tesouro IPCA+ 2035");
    assert_eq!(naming.conversion_date, None);
  }

  #[test]
  fn test_missing_maturity_falls_back_to_type() {
    let naming = BondNaming::derive("Tesouro Educa+", None);
    assert_eq!(naming.name, "Tesouro Educa+");
    assert_eq!(naming.conversion_date, None);
  }
}
