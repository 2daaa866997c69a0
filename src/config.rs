use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

static ENV_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{(\w+)\}").expect("valid placeholder pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_index_page")]
    pub index_page: String,
    #[serde(default = "default_icon_file")]
    pub icon_file: String,
}

/// Settings for the OpenAI-compatible chat-completion provider.
/// The API key is not part of it: callers supply one per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    /// Supports `{source_lang}`, `{target_lang}` and `{text}`.
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Sent as `HTTP-Referer`
    #[serde(default = "default_referer")]
    pub referer: String,
    /// Sent as `X-Title`
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_index_page() -> String {
    "templates/index.html".to_string()
}

fn default_icon_file() -> String {
    "Logo.ico".to_string()
}

fn default_api_base() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "deepseek/deepseek-r1:free".to_string()
}

fn default_system_prompt() -> String {
    "You are a helpful translation assistant.".to_string()
}

fn default_prompt_template() -> String {
    "Translate the following text from {source_lang} to {target_lang}. \
     Only output the translated sentence, with no explanation or extra text: {text}"
        .to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_referer() -> String {
    "http://localhost".to_string()
}

fn default_title() -> String {
    "FluentFlow".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            index_page: default_index_page(),
            icon_file: default_icon_file(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
            system_prompt: default_system_prompt(),
            prompt_template: default_prompt_template(),
            max_tokens: default_max_tokens(),
            temperature: None,
            timeout_secs: default_timeout_secs(),
            referer: default_referer(),
            title: default_title(),
        }
    }
}

impl UpstreamConfig {
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }
        let content = substitute_env_vars(&fs::read_to_string(path)?);
        Self::parse(path, &content)
    }

    /// Picks the format from the file extension: JSON for `.json`/`.jsonld`,
    /// YAML for everything else.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            Ok(serde_json::from_str(content)?)
        } else if content.trim().is_empty() {
            Ok(Self::default())
        } else {
            Ok(serde_yaml::from_str(content)?)
        }
    }
}

/// Replace `${VAR_NAME}` with the environment value; unknown variables stay as written.
pub fn substitute_env_vars(content: &str) -> String {
    ENV_PLACEHOLDER
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}
