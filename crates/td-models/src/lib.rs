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

//! # td-models
//!
//! Data models for the aggregated Tesouro Direto bond table.
//!
//! - [`BondRecord`]: one bond instrument with its latest quotation
//! - [`InstrumentKey`]: the (type, maturity) identity rows are grouped by
//! - [`InstrumentFamily`]: naming and conversion-date rules per bond family
//!
//! ## Usage
//!
//! ```ignore
//! use td_models::BondRecord;
//!
//! let records: Vec<BondRecord> = serde_json::from_str(&latest_json)?;
//! ```

#![warn(clippy::all)]

pub mod bond;
pub mod family;

pub use bond::{BondRecord, InstrumentKey};
pub use family::{BondNaming, InstrumentFamily};
