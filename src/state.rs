use std::sync::Arc;

use crate::config::Config;
use crate::error::TranslateError;
use crate::translate::TranslationBridge;

/// Shared, read-only for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<TranslationBridge>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, TranslateError> {
        let translator = Arc::new(TranslationBridge::new(config.upstream.clone())?);
        Ok(Self {
            config: Arc::new(config),
            translator,
        })
    }
}
