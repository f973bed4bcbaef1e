use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::SourceConfig;
use crate::country::Country;

use super::{CountrySource, SourceError};

/// Fetches the directory with one GET against a REST endpoint.
pub struct HttpCountrySource {
    client: Client,
    url: Url,
}

impl HttpCountrySource {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let url = Url::parse_with_params(&config.url, &[("fields", config.fields.join(","))])
            .map_err(|e| SourceError::InvalidUrl {
                url: config.url.clone(),
                reason: e.to_string(),
            })?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()?;

        Ok(Self { client, url })
    }

    /// Full request URL including the field selection.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl CountrySource for HttpCountrySource {
    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError> {
        tracing::debug!(url = %self.url, "Fetching countries");

        let start = Instant::now();
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(status = %status, "Country endpoint returned an error status");
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let countries: Vec<Country> = serde_json::from_slice(&body)?;

        tracing::info!(
            count = countries.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Fetched countries"
        );

        Ok(countries)
    }
}
