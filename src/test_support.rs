//! Throwaway OpenAI-compatible upstream for tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::config::UpstreamConfig;

#[derive(Debug, Clone)]
pub struct FakeReply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl FakeReply {
    pub fn completion(content: &str) -> Self {
        Self::status(
            StatusCode::OK,
            json!({
                "id": "gen-test",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
            })
            .to_string(),
        )
    }

    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub authorization: Option<String>,
    pub referer: Option<String>,
    pub title: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeState {
    reply: FakeReply,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

pub struct FakeUpstream {
    pub base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeUpstream {
    pub async fn spawn(reply: FakeReply) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/api/v1/chat/completions", post(completions))
            .with_state(FakeState {
                reply,
                calls: calls.clone(),
            });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api/v1", addr),
            calls,
        }
    }

    pub fn config(&self, timeout_secs: u64) -> UpstreamConfig {
        UpstreamConfig {
            api_base: self.base_url.clone(),
            timeout_secs,
            ..UpstreamConfig::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

/// Config pointing at a port nothing listens on.
pub async fn unreachable_config() -> UpstreamConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    UpstreamConfig {
        api_base: format!("http://{}/api/v1", addr),
        timeout_secs: 5,
        ..UpstreamConfig::default()
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn completions(
    State(state): State<FakeState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let call = RecordedCall {
        authorization: header_value(&headers, "authorization"),
        referer: header_value(&headers, "http-referer"),
        title: header_value(&headers, "x-title"),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    };
    state.calls.lock().unwrap().push(call);

    if let Some(delay) = state.reply.delay {
        tokio::time::sleep(delay).await;
    }

    (
        state.reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.reply.body.clone(),
    )
}
