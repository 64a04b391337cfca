use crate::domain::entities::{ChatMessage, CompletionRequest};
use crate::domain::errors::{ProviderError, ProviderResult};
use crate::domain::ports::CompletionProvider;
use crate::infrastructure::providers::http::{build_client, decode_json, ensure_success, transport_error};
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    top_p: f32,
    max_completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI-compatible chat completions endpoint (Groq)
pub struct GroqCompletionProvider {
    base_url: String,
    api_key: String,
    model: String,
    http_client: Client,
}

impl GroqCompletionProvider {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> ProviderResult<Self> {
        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            http_client: build_client(None)?,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl CompletionProvider for GroqCompletionProvider {
    async fn complete(&self, request: &CompletionRequest) -> ProviderResult<String> {
        let body = ChatCompletionBody {
            model: &self.model,
            messages: &request.messages,
            temperature: request.sampling.temperature,
            top_p: request.sampling.top_p,
            max_completion_tokens: request.sampling.max_completion_tokens,
        };

        let response = self
            .http_client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let completion: ChatCompletionResponse =
            decode_json(ensure_success(response).await?).await?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::Malformed("completion has no message content".to_string()))
    }
}
