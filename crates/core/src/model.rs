//! The text-completion capability and its OpenAI-compatible client.
//!
//! [`SummaryModel`] is the one abstraction point over the external
//! provider: one request in, text out, explicit error variants. Tests swap
//! in a fake; production uses [`OpenAiChatModel`] over reqwest.

use crate::config::ProviderConfig;
use crate::error::{DischargeError, DischargeResult};
use serde::{Deserialize, Serialize};

/// One completion exchange: a system instruction, a user prompt, and a
/// response-length ceiling. No streaming, no multi-turn state.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub max_completion_tokens: u32,
}

/// A text-completion capability.
///
/// The returned string may be empty when the provider produced no content;
/// callers decide what an empty completion means. Hard provider failures
/// surface as errors.
#[async_trait::async_trait]
pub trait SummaryModel: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> DischargeResult<String>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_completion_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Chat-completions client for any OpenAI-compatible provider.
#[derive(Clone)]
pub struct OpenAiChatModel {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl OpenAiChatModel {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait::async_trait]
impl SummaryModel for OpenAiChatModel {
    async fn complete(&self, request: CompletionRequest) -> DischargeResult<String> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            max_completion_tokens: request.max_completion_tokens,
        };

        let response = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DischargeError::ProviderStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_expected_shape() {
        let body = ChatRequest {
            model: "gpt-5.1",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "prompt",
                },
            ],
            max_completion_tokens: 1500,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-5.1");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "prompt");
        assert_eq!(json["max_completion_tokens"], 1500);
    }

    #[test]
    fn chat_response_tolerates_missing_content() {
        let parsed: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();
        assert_eq!(text, "");

        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }
}
