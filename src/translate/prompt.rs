use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::UpstreamConfig;
use crate::upstream::{ChatCompletionRequest, ChatMessage};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(source_lang|target_lang|text)\}").expect("valid placeholder pattern")
});

/// Fill the template in one pass; braces inside the substituted values are left alone.
pub fn render_prompt(template: &str, source_lang: &str, target_lang: &str, text: &str) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "source_lang" => source_lang.to_string(),
            "target_lang" => target_lang.to_string(),
            _ => text.to_string(),
        })
        .into_owned()
}

/// Two-message conversation: fixed system role plus the rendered instruction.
pub fn build_completion_request(
    config: &UpstreamConfig,
    source_lang: &str,
    target_lang: &str,
    text: &str,
) -> ChatCompletionRequest {
    let prompt = render_prompt(&config.prompt_template, source_lang, target_lang, text);
    ChatCompletionRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage::system(config.system_prompt.clone()),
            ChatMessage::user(prompt),
        ],
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    }
}
