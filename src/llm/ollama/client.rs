//! Ollama client implementation

use async_trait::async_trait;
use reqwest::Client;

use crate::llm::core::{
    config::ProviderKind,
    error::{BackendError, LlmError},
    provider::LlmProvider,
    types::GenerateRequest,
};

use super::mapper::{from_ollama_error, from_ollama_response, to_ollama_request};
use super::types::OllamaChatResponse;

/// Default local daemon address
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Client for a local or remote Ollama daemon
pub struct OllamaClient {
    http_client: Client,
    base_url: String,
}

impl OllamaClient {
    /// Create a new Ollama client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: Option<String>) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn build_endpoint_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

#[async_trait]
impl LlmProvider for OllamaClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Ollama
    }

    async fn generate(&self, request: GenerateRequest) -> Result<String, BackendError> {
        let body = to_ollama_request(request);
        let url = self.build_endpoint_url();

        tracing::debug!(
            url = %url,
            model = %body.model,
            messages = body.messages.len(),
            temperature = body.options.temperature,
            "sending Ollama chat request"
        );

        let response = self.http_client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Ollama request failed");
            return Err(from_ollama_error(status.as_u16(), body));
        }

        let chat: OllamaChatResponse = response.json().await?;
        let text = from_ollama_response(chat)?;
        tracing::debug!(chars = text.len(), "Ollama completion received");
        Ok(text)
    }
}
