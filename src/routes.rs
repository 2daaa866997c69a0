use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::error::TranslateError;
use crate::state::AppState;
use crate::translate::{Language, TranslationRequest, TranslationResult, LANGUAGES};

pub fn create_routes(state: AppState) -> Router<AppState> {
    let server = &state.config.server;
    let icon_path = PathBuf::from(&server.static_dir).join(&server.icon_file);

    Router::new()
        .route("/translate", post(translate))

        // Health check
        .route("/api/health", get(health_check))
        .route("/api/languages", get(get_languages))

        // Page and static assets
        .route_service("/", ServeFile::new(&server.index_page))
        .route_service("/Logo.ico", ServeFile::new(icon_path))
        .nest_service("/static", ServeDir::new(&server.static_dir))
}

/// Full application with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResult>, TranslateError> {
    let Json(request) =
        payload.map_err(|rejection| TranslateError::Validation(rejection.body_text()))?;

    let translated_text = state.translator.translate(&request).await?;
    Ok(Json(TranslationResult::Translated { translated_text }))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn get_languages() -> Json<&'static [Language]> {
    Json(LANGUAGES)
}
