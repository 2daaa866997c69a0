use serde::{Deserialize, Serialize};

use crate::error::TranslateError;

/// Body of `POST /translate`. Absent and `null` fields are both `None`;
/// the language accessors fall back to `auto` and `en`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source_lang: Option<String>,
    #[serde(default)]
    pub target_lang: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl TranslationRequest {
    #[cfg(test)]
    pub fn new(text: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn with_languages(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source_lang = Some(source.into());
        self.target_lang = Some(target.into());
        self
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    pub fn source_lang(&self) -> &str {
        self.source_lang.as_deref().unwrap_or("auto")
    }

    pub fn target_lang(&self) -> &str {
        self.target_lang.as_deref().unwrap_or("en")
    }

    /// Whitespace-only text or key counts as missing.
    pub fn validate(&self) -> Result<(), TranslateError> {
        if self.text().trim().is_empty() || self.api_key().trim().is_empty() {
            return Err(TranslateError::Validation(
                "Missing text or API key".to_string(),
            ));
        }
        Ok(())
    }
}

/// What the browser receives: `{"translatedText": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationResult {
    Translated {
        #[serde(rename = "translatedText")]
        translated_text: String,
    },
    Failed {
        error: String,
    },
}
