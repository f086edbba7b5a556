use thiserror::Error;

/// The main error type for td-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Text that is not a pt-BR decimal number
  #[error("invalid number {0:?}")]
  InvalidNumber(String),

  /// Text that is not a dd/mm/yyyy calendar date
  #[error("invalid date {input:?}: {reason}")]
  InvalidDate { input: String, reason: String },

  /// Empty date field
  #[error("empty date string")]
  EmptyDate,

  /// Date/Time parsing error
  #[error("Date parsing error: {0}")]
  ParseDate(#[from] chrono::ParseError),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Unexpected HTTP status from the feed source
  #[error("unexpected status code: {0}")]
  Status(u16),
}

/// Result type alias for td-* crates
pub type Result<T> = std::result::Result<T, Error>;
