use tracing::{debug, info, warn};
use uuid::Uuid;

use super::cleanup::clean_translation;
use super::interface::TranslationRequest;
use super::languages::language_name;
use super::prompt::build_completion_request;
use crate::config::UpstreamConfig;
use crate::error::TranslateError;
use crate::upstream::ChatCompletionClient;

/// Forwards one translation request to the chat-completion provider and
/// cleans the answer. Holds no per-request state.
pub struct TranslationBridge {
    config: UpstreamConfig,
    client: ChatCompletionClient,
}

impl TranslationBridge {
    pub fn new(config: UpstreamConfig) -> Result<Self, TranslateError> {
        let client = ChatCompletionClient::new(&config)?;
        info!("Initialized TranslationBridge: model={}", config.model);
        Ok(Self { config, client })
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        if let Err(e) = request.validate() {
            warn!("Rejected translation request: {}", e);
            return Err(e);
        }

        let request_id = Uuid::new_v4();
        info!(
            "[{}] Translating {} chars: {} -> {}",
            request_id,
            request.text().chars().count(),
            language_name(request.source_lang()),
            language_name(request.target_lang())
        );

        let completion = build_completion_request(
            &self.config,
            request.source_lang(),
            request.target_lang(),
            request.text(),
        );

        let response = match self.client.complete(request.api_key(), &completion).await {
            Ok(response) => response,
            Err(e) => {
                warn!("[{}] Upstream call to {} failed: {}", request_id, self.client.url(), e);
                return Err(e);
            }
        };

        let raw = response.first_content().ok_or_else(|| {
            warn!("[{}] Upstream response had no message content", request_id);
            TranslateError::Upstream("Upstream response contained no message content".to_string())
        })?;

        let translated = clean_translation(raw);
        debug!(
            "[{}] Cleaned answer: {} -> {} chars",
            request_id,
            raw.chars().count(),
            translated.chars().count()
        );
        Ok(translated)
    }
}
