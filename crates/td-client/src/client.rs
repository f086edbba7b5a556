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

use crate::transport::Transport;
use td_core::{Config, Result};
use tracing::info;

/// Client for the Tesouro Transparente price/rate export
///
/// # Examples
///
/// ```ignore
/// use td_client::FeedClient;
/// use td_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = FeedClient::new(&Config::from_env()?)?;
///     let body = client.fetch_feed().await?;
///     println!("{} bytes", body.len());
///     Ok(())
/// }
/// ```
pub struct FeedClient {
  transport: Transport,
  source_url: String,
}

impl FeedClient {
  /// Create a client for the source URL in `config`
  pub fn new(config: &Config) -> Result<Self> {
    Ok(Self { transport: Transport::new(config)?, source_url: config.source_url.clone() })
  }

  /// Download the raw feed from the configured source
  pub async fn fetch_feed(&self) -> Result<Vec<u8>> {
    info!("Downloading feed from {}", self.source_url);
    self.transport.get_bytes(&self.source_url).await
  }

  /// The URL the feed is downloaded from
  pub fn source_url(&self) -> &str {
    &self.source_url
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use td_core::Error;
  use wiremock::matchers::{header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  const BODY: &str = "Tipo Titulo;Data Vencimento;Data Base\nTesouro Selic;01/03/2029;02/01/2025\n";

  fn config_for(server: &MockServer, max_retries: u32) -> Config {
    Config {
      source_url: format!("{}/precotaxatesourodireto.csv", server.uri()),
      timeout_secs: 5,
      max_retries,
      ..Config::default()
    }
  }

  #[tokio::test]
  async fn test_fetch_feed_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/precotaxatesourodireto.csv"))
      .and(header("user-agent", "tesouro-api-updater/1.0"))
      .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
      .expect(1)
      .mount(&server)
      .await;

    let client = FeedClient::new(&config_for(&server, 0)).unwrap();
    let body = client.fetch_feed().await.unwrap();
    assert_eq!(body, BODY.as_bytes());
  }

  #[tokio::test]
  async fn test_fetch_feed_rejects_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(404))
      .expect(1)
      .mount(&server)
      .await;

    let client = FeedClient::new(&config_for(&server, 0)).unwrap();
    let err = client.fetch_feed().await.unwrap_err();
    assert!(matches!(err, Error::Status(404)));
  }

  #[tokio::test]
  async fn test_fetch_feed_retries_failed_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(503))
      .up_to_n_times(1)
      .mount(&server)
      .await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
      .mount(&server)
      .await;

    let client = FeedClient::new(&config_for(&server, 1)).unwrap();
    let body = client.fetch_feed().await.unwrap();
    assert_eq!(body, BODY.as_bytes());
  }
}
