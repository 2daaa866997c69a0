use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::config::UpstreamConfig;
use crate::error::TranslateError;

/// OpenAI compatible chat-completion client (OpenRouter by default).
/// Holds no credentials; the caller's key is attached per call.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    client: Client,
    url: String,
    referer: String,
    title: String,
}

impl ChatCompletionClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let url = config.completions_url();
        info!(
            "Initialized ChatCompletionClient: url={}, timeout={}s",
            url, config.timeout_secs
        );
        Ok(Self {
            client,
            url,
            referer: config.referer.clone(),
            title: config.title.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Single POST, no retry. Any non-2xx status is an error.
    pub async fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, TranslateError> {
        debug!("POST {} model={}", self.url, request.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if let Err(err) = response.error_for_status_ref() {
            warn!("Upstream returned {}", status);
            return Err(err.into());
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
