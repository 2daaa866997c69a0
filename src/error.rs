use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::translate::TranslationResult;

#[derive(Error, Debug)]
pub enum TranslateError {
    /// Caller must resupply the request.
    #[error("{0}")]
    Validation(String),

    /// Network failure, timeout, non-2xx status or an unusable payload.
    #[error("{0}")]
    Upstream(String),
}

impl TranslateError {
    pub fn status(&self) -> StatusCode {
        match self {
            TranslateError::Validation(_) => StatusCode::BAD_REQUEST,
            TranslateError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        TranslateError::Upstream(err.to_string())
    }
}

impl From<serde_json::Error> for TranslateError {
    fn from(err: serde_json::Error) -> Self {
        TranslateError::Upstream(err.to_string())
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = TranslationResult::Failed {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
