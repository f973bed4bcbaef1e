//! Fact generation through an Anthropic-compatible Messages API.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::FactsConfig;
use crate::country::Country;

use super::{FactError, FactGenerator};

const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct LlmFactGenerator {
    client: Client,
    config: FactsConfig,
    api_key: String,
}

impl LlmFactGenerator {
    /// Fails with [`FactError::NotConfigured`] when no API key is set.
    pub fn new(config: FactsConfig) -> Result<Self, FactError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(FactError::NotConfigured)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn build_request(&self, country: &Country) -> ApiRequest {
        ApiRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt_for(country),
            }],
        }
    }
}

fn prompt_for(country: &Country) -> String {
    format!(
        "Tell me one interesting fact about {} in a single sentence.",
        country.display_name()
    )
}

#[async_trait]
impl FactGenerator for LlmFactGenerator {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn generate(&self, country: &Country) -> Result<String, FactError> {
        let url = format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'));
        let body = self.build_request(country);

        tracing::debug!(
            url = %url,
            model = %self.config.model,
            country = %country.cca3,
            "Requesting fun fact"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::error!(status = %status, error = %message, "Fact API error");
            return Err(FactError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        let parsed: ApiResponse = serde_json::from_str(&text)
            .map_err(|e| FactError::Parse(format!("Failed to parse response JSON: {}", e)))?;

        tracing::debug!(
            latency_ms = start.elapsed().as_millis() as u64,
            "Fun fact received"
        );

        parsed
            .content
            .into_iter()
            .filter(|block| block.content_type == "text")
            .find_map(|block| block.text)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(FactError::Empty)
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: Option<String>,
}
