//! OpenAI client implementation

use async_trait::async_trait;
use reqwest::Client;

use crate::llm::core::{
    config::ProviderKind,
    error::{BackendError, LlmError},
    provider::LlmProvider,
    types::GenerateRequest,
};

use super::mapper::{from_openai_error, from_openai_response, to_openai_request};
use super::types::ChatCompletionResponse;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for the OpenAI chat completions API
pub struct OpenAiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Bearer token
    api_key: String,
    /// API root, without trailing slash
    base_url: String,
}

impl OpenAiClient {
    /// Create a new OpenAI client
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key sent as a bearer token
    /// * `base_url` - API root override (for compatible servers); defaults to OpenAI
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: String, base_url: Option<String>) -> Result<Self, LlmError> {
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
            api_key,
            base_url,
        })
    }

    /// Build the endpoint URL for chat completions
    fn build_endpoint_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn generate(&self, request: GenerateRequest) -> Result<String, BackendError> {
        let body = to_openai_request(request);
        let url = self.build_endpoint_url();

        tracing::debug!(
            url = %url,
            model = %body.model,
            messages = body.messages.len(),
            temperature = body.temperature,
            "sending OpenAI chat completion"
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        // Check status
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "OpenAI request failed");
            return Err(from_openai_error(status.as_u16(), body));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let text = from_openai_response(completion)?;
        tracing::debug!(chars = text.len(), "OpenAI completion received");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_default() {
        let client = OpenAiClient::new("sk-test".to_string(), None).unwrap();
        assert_eq!(
            client.build_endpoint_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_endpoint_url_override_trims_slash() {
        let client =
            OpenAiClient::new("sk-test".to_string(), Some("http://localhost:8080/v1/".to_string()))
                .unwrap();
        assert_eq!(
            client.build_endpoint_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }
}
