//! # td-loaders
//!
//! Turns the Tesouro Direto price/rate feed into the published bond table.
//!
//! This crate provides:
//! - Feed parsing with header validation and tolerant row handling
//! - Row normalization (pt-BR dates and decimals, bond naming)
//! - Aggregation to one record per instrument (latest quote, earliest date)
//! - Ordering and atomic JSON/CSV writers

pub mod aggregator;
pub mod csv_processor;
pub mod error;
pub mod loader;
pub mod normalizer;
pub mod writer;

// Re-export commonly used types
pub use aggregator::BondAggregator;
pub use csv_processor::{parse_feed, CsvProcessor, FeedParse, ParseStats, FEED_COLUMNS};
pub use error::{LoaderError, LoaderResult};
pub use loader::{BondLoader, LoaderConfig, LoaderOutput};
pub use normalizer::normalize_row;
pub use writer::{sort_records, write_csv, write_json, CSV_HEADER};
