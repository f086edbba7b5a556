//! HTTP transport layer for downloading the price/rate feed

use reqwest::{Client, Response};
use std::time::Duration;
use td_core::{Config, Error, Result};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// HTTP transport layer for fetching raw feed bodies
pub struct Transport {
    client: Client,
    max_retries: u32,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
        })
    }

    /// Download the body behind `url`
    ///
    /// Failed attempts are retried up to the configured limit with an
    /// exponential backoff. A non-2xx status counts as a failed attempt.
    #[instrument(skip(self))]
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let url = Url::parse(url).map_err(|e| Error::Http(format!("Invalid URL {}: {}", url, e)))?;

        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(2_u64.pow(attempt) * 1000); // Exponential backoff
                warn!("Retrying download in {}ms (attempt {})", delay.as_millis(), attempt + 1);
                tokio::time::sleep(delay).await;
            }

            match self.make_request(&url).await {
                Ok(response) => {
                    let body = response
                        .bytes()
                        .await
                        .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

                    info!("Downloaded {} bytes from {}", body.len(), url);
                    return Ok(body.to_vec());
                }
                Err(e) => {
                    warn!("Download failed (attempt {}): {}", attempt + 1, e);
                    last_error = Some(e);
                    attempt += 1;
                }
            }
        }

        Err(last_error.unwrap_or_else(|| Error::Http("Max retries exceeded".to_string())))
    }

    /// Make the actual HTTP request
    async fn make_request(&self, url: &Url) -> Result<Response> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        let status = response.status();

        if status.is_success() {
            debug!("Request successful with status: {}", status);
            Ok(response)
        } else {
            error!("Request failed with status: {}", status);
            Err(Error::Status(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_from_config() {
        let config = Config {
            timeout_secs: 5,
            max_retries: 2,
            ..Config::default()
        };
        let transport = Transport::new(&config).unwrap();
        assert_eq!(transport.max_retries, 2);
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        let transport = Transport::new(&Config::default()).unwrap();
        let err = transport.get_bytes("not a url").await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }
}
