//! OpenAI-compatible completion provider
//!
//! Implements the [`CompletionProvider`] port against a Chat Completions
//! endpoint. Structured calls send a strict `json_schema` response format.

use super::types::{ApiError, ChatCompletionRequest, ChatCompletionResponse, ResponseFormat};
use async_trait::async_trait;
use debate_application::ports::completion::{CompletionProvider, ProviderError};
use debate_domain::{ChatMessage, ResponseSchema};
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Connection settings for an OpenAI-compatible endpoint
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    /// Base URL including the version segment, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: Option<u32>,
}

pub struct OpenAiCompletionProvider {
    client: Client,
    settings: OpenAiSettings,
}

impl OpenAiCompletionProvider {
    /// Create a provider; an empty model name is rejected.
    pub fn new(settings: OpenAiSettings) -> Result<Self, ProviderError> {
        if settings.model.trim().is_empty() {
            return Err(ProviderError::Configuration(
                "model name cannot be empty".to_string(),
            ));
        }
        if settings.api_key.trim().is_empty() {
            return Err(ProviderError::Configuration("API key is empty".to_string()));
        }
        Ok(Self {
            client: Client::new(),
            settings,
        })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    fn build_request<'a>(
        &'a self,
        messages: &'a [ChatMessage],
        schema: Option<&'a ResponseSchema>,
    ) -> Result<ChatCompletionRequest<'a>, ProviderError> {
        if messages.is_empty() {
            return Err(ProviderError::EmptyRequest);
        }
        Ok(ChatCompletionRequest {
            model: &self.settings.model,
            messages,
            max_tokens: self.settings.max_tokens,
            response_format: schema.map(ResponseFormat::strict),
        })
    }

    async fn send(&self, request: ChatCompletionRequest<'_>) -> Result<String, ProviderError> {
        let started = Instant::now();
        let structured = request.response_format.is_some();

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                duration_ms = started.elapsed().as_millis() as u64,
                "Completion request failed"
            );
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        if let Some(usage) = &body.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Completion usage"
            );
        }
        info!(
            model = %self.settings.model,
            structured,
            duration_ms = started.elapsed().as_millis() as u64,
            "Completion finished"
        );

        first_choice_text(body)
    }
}

/// Message from an error body, falling back to the raw text
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(api_error) => api_error.error.message,
        Err(_) if body.trim().is_empty() => "empty error body".to_string(),
        Err(_) => body.to_string(),
    }
}

fn first_choice_text(body: ChatCompletionResponse) -> Result<String, ProviderError> {
    let choice = body
        .choices
        .into_iter()
        .next()
        .ok_or(ProviderError::EmptyResponse)?;

    if choice.finish_reason.as_deref() == Some("length") {
        warn!("Completion was cut off at max_tokens");
    }

    match (choice.message.content, choice.message.refusal) {
        (Some(content), _) if !content.is_empty() => Ok(content),
        (_, Some(refusal)) => Err(ProviderError::InvalidResponse(format!(
            "model refused: {}",
            refusal
        ))),
        _ => Err(ProviderError::EmptyResponse),
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletionProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let request = self.build_request(messages, None)?;
        self.send(request).await
    }

    async fn complete_structured(
        &self,
        messages: &[ChatMessage],
        schema: &ResponseSchema,
    ) -> Result<String, ProviderError> {
        let request = self.build_request(messages, Some(schema))?;
        self.send(request).await
    }
}
