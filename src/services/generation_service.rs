use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret as _;
use serde::{Deserialize, Serialize};

use crate::{config::Config, errors::AppResult};

/// Turns a prompt into generated text.
///
/// `Ok(None)` means the service answered but produced no usable text;
/// callers pick their own fallback for that case.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<Option<String>>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionReply {
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
    }
}

/// Gemini through its OpenAI-compatible chat completions endpoint.
pub struct GeminiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.gemini_api_key.expose_secret())
            .with_api_base(config.gemini_api_base.trim_end_matches('/'));

        Self {
            client: Client::with_config(openai_config),
            model: config.gemini_model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, prompt: &str) -> ChatCompletionBody {
        ChatCompletionBody {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
        }
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> AppResult<Option<String>> {
        log::debug!(
            "Requesting generation from {} ({} prompt bytes)",
            self.model,
            prompt.len()
        );

        let reply: ChatCompletionReply = self
            .client
            .chat()
            .create_byot(self.request_body(prompt))
            .await?;

        let text = reply.into_text();
        if text.is_none() {
            log::warn!("Generation service returned no text for model {}", self.model);
        }
        Ok(text)
    }
}
