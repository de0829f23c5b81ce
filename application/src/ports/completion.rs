//! Completion provider port
//!
//! Defines the interface for asking a language model for text.

use async_trait::async_trait;
use debate_domain::{ChatMessage, ResponseSchema};
use thiserror::Error;

/// Errors that can occur during completion calls
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Invalid provider configuration: {0}")]
    Configuration(String),

    #[error("Completion request has no messages")]
    EmptyRequest,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Provider returned no choices")]
    EmptyResponse,

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Model output does not match the expected schema: {0}")]
    MalformedOutput(String),
}

/// Gateway to a text-completion model
///
/// Implementations (adapters) live in the infrastructure layer. Both calls
/// fail with [`ProviderError::EmptyRequest`] on an empty message list.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate free text for a role-tagged message sequence
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError>;

    /// Generate text constrained to `schema`
    async fn complete_structured(
        &self,
        messages: &[ChatMessage],
        schema: &ResponseSchema,
    ) -> Result<String, ProviderError>;
}
