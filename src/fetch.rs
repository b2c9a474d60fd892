//! ECB reference-rate feed client
//!
//! Issues the single blocking GET against the ECB's daily eurofxref endpoint
//! and hands the raw XML payload to the extractor. No retry policy: any
//! transport failure or non-success status aborts the run.

use crate::error::{EcbRatesError, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Daily reference-rate feed published by the European Central Bank
pub const ECB_DAILY_URL: &str = "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-daily.xml";

const HTTP_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the ECB feed
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Create a new feed client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| EcbRatesError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch the daily feed and return the raw XML payload
    pub fn fetch_daily(&self) -> Result<String> {
        self.fetch(ECB_DAILY_URL)
    }

    fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| EcbRatesError::Network(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(EcbRatesError::Network(format!(
                "Rate feed returned error: {}",
                response.status()
            )));
        }

        response
            .text()
            .map_err(|e| EcbRatesError::Network(format!("Failed to read response body: {}", e)))
    }
}
