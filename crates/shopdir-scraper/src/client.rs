//! HTTP client for the shop directory's list and detail pages.

use std::time::Duration;

use reqwest::Client;

use shopdir_core::ShopRecord;

use crate::detail::extract_shop_record;
use crate::error::ScrapeError;

/// HTTP client for the shop directory.
///
/// Sends a fixed browser-identifying `User-Agent` with every request and maps
/// non-2xx responses to typed errors. There is no retry: a failed URL is the
/// caller's to skip for the rest of the run.
pub struct DirectoryClient {
    client: Client,
}

impl DirectoryClient {
    /// Creates a `DirectoryClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches a page and returns its body as HTML text.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ScrapeError::Http`] — network failure, timeout, or body read error.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches a shop detail page and extracts its [`ShopRecord`].
    ///
    /// Extraction itself cannot fail (missing fields resolve to the `"N/A"`
    /// placeholder), so the only error source is the fetch.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_page`].
    pub async fn fetch_shop_details(&self, url: &str) -> Result<ShopRecord, ScrapeError> {
        let body = self.fetch_page(url).await?;
        Ok(extract_shop_record(&body))
    }
}
