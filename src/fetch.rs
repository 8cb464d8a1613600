//! Remote dataset retrieval.
//!
//! This module downloads the input CSV files from their published sources.
//! It handles request formatting, response validation, and automatic retry
//! with exponential backoff.
//!
//! # Retry Behavior
//!
//! The client automatically retries on transient errors:
//! - Connection timeouts
//! - Rate limiting (429)
//! - Server errors (5xx)
//!
//! Retry delays use exponential backoff with configurable parameters.
//!
//! # Example
//!
//! ```
//! use covid_data_analyzer::{config::RetryConfig, fetch::DatasetClient};
//!
//! let client = DatasetClient::with_retry_config(RetryConfig::default());
//! ```

use std::{path::Path, time::Duration};

use tokio::time::sleep;

use crate::{
    config::RetryConfig,
    error::{AppResult, download_error, file_write_error, http_error}
};

/// HTTP client for dataset downloads with retry support.
///
/// Automatically retries transient failures with exponential backoff.
pub struct DatasetClient {
    client:       reqwest::Client,
    retry_config: RetryConfig
}

impl DatasetClient {
    /// Create new client with default retry configuration
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::with_retry_config(RetryConfig::default())
    }

    /// Create new client with custom retry configuration
    pub fn with_retry_config(retry_config: RetryConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            retry_config
        }
    }

    /// Download a dataset CSV to a local file with automatic retry
    ///
    /// # Returns
    ///
    /// Number of bytes written
    pub async fn download(&self, url: &str, dest: &Path) -> AppResult<u64> {
        let body = self.fetch_with_retry(url).await?;
        tokio::fs::write(dest, &body)
            .await
            .map_err(|e| file_write_error(&dest.display().to_string(), e))?;
        Ok(body.len() as u64)
    }

    async fn fetch_with_retry(&self, url: &str) -> AppResult<Vec<u8>> {
        let mut last_error = None;
        let mut delay = self.retry_config.initial_delay_ms;
        for attempt in 0..=self.retry_config.max_retries {
            if attempt > 0 {
                eprintln!(
                    "Retrying download (attempt {}/{}), waiting {}ms...",
                    attempt + 1,
                    self.retry_config.max_retries + 1,
                    delay
                );
                sleep(Duration::from_millis(delay)).await;
                delay = ((delay as f64 * self.retry_config.backoff_factor) as u64)
                    .min(self.retry_config.max_delay_ms);
            }
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    if self.is_retryable_error(&e) {
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| download_error("All retry attempts failed")))
    }

    fn is_retryable_error(&self, error: &masterror::AppError) -> bool {
        let msg = error.to_string().to_lowercase();
        msg.contains("timeout")
            || msg.contains("connection")
            || msg.contains("429")
            || msg.contains("rate limit")
            || msg.contains("500")
            || msg.contains("502")
            || msg.contains("503")
            || msg.contains("504")
    }

    async fn fetch_once(&self, url: &str) -> AppResult<Vec<u8>> {
        let response = self.client.get(url).send().await.map_err(http_error)?;
        if !response.status().is_success() {
            let status = response.status();
            return Err(download_error(format!(
                "Download failed with {} for {}",
                status, url
            )));
        }
        let body = response.bytes().await.map_err(http_error)?;
        Ok(body.to_vec())
    }
}

impl Default for DatasetClient {
    fn default() -> Self {
        Self::new()
    }
}
