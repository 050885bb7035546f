use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::Settings;
use crate::domain::AnalyticsRecord;
use crate::error::{Error, Result};

/// HTTP client for the published analytics document.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    client: Client,
    url: Url,
}

impl AnalyticsClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let url = Url::parse(&settings.analytics_url)?;
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the analytics document and return its first record.
    ///
    /// A non-success status is reported as `UpstreamStatus`; the body is
    /// parsed separately from the transfer so malformed JSON surfaces as a
    /// `Json` error rather than a transport error.
    pub async fn latest_record(&self) -> Result<AnalyticsRecord> {
        debug!("Fetching analytics document from {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let mut records: Vec<AnalyticsRecord> = serde_json::from_str(&body)?;

        if records.is_empty() {
            return Err(Error::EmptyDocument);
        }

        Ok(records.swap_remove(0))
    }
}
