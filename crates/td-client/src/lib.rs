//! # td-client
//!
//! Downloads the Tesouro Direto price/rate CSV published by Tesouro Transparente.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use td_client::FeedClient;
//! use td_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FeedClient::new(&Config::default())?;
//!     let body = client.fetch_feed().await?;
//!     println!("Downloaded {} bytes", body.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, td_core::Error>`. Non-2xx responses surface as
//! `Error::Status`, connection and timeout failures as `Error::Http`.

#![deny(missing_docs)]
#![warn(clippy::all)]

/// Feed client bound to a configured source URL
pub mod client;
pub mod transport;

pub use client::FeedClient;
pub use td_core::{Config, Error, Result};
