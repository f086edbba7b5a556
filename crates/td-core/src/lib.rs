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

//! Core types shared by the td-* crates: errors, configuration and the
//! pt-BR text codecs used by the Tesouro Direto feed.

pub mod config;
pub mod dates;
pub mod error;
pub mod locale;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use dates::{format_br_date, format_iso_date, parse_br_date, parse_iso_date};
pub use error::{Error, Result};
pub use locale::{format_br_decimal, parse_br_decimal};

/// Public CSV export of Tesouro Direto prices and rates (Tesouro Transparente CKAN)
pub const DEFAULT_SOURCE_URL: &str = "https://www.tesourotransparente.gov.br/ckan/dataset/df56aa42-484a-4a59-8184-7676580c81e3/resource/796d2059-14e9-44e3-80c9-2d9e30b405c1/download/precotaxatesourodireto.csv";

/// Directory the generated files are written to
pub const DEFAULT_OUT_DIR: &str = "public";

/// Download timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Extra download attempts after the first one fails
pub const DEFAULT_MAX_RETRIES: u32 = 0;

/// User agent sent with every download
pub const USER_AGENT: &str = "tesouro-api-updater/1.0";
