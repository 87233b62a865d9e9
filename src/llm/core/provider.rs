//! Provider trait for LLM implementations

use async_trait::async_trait;

use super::config::{LlmConfig, ProviderKind};
use super::error::{BackendError, LlmError};
use super::types::GenerateRequest;

/// Main interface that all LLM provider implementations must satisfy
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Which backend this provider talks to
    fn kind(&self) -> ProviderKind;

    /// Generate a chat completion
    ///
    /// Sends the ordered messages with the request's sampling parameters in a
    /// single round trip and returns the text of the first completion choice.
    async fn generate(&self, request: GenerateRequest) -> Result<String, BackendError>;
}

/// Create an LLM provider from a configuration
///
/// This factory function creates the appropriate provider client based on
/// `config.provider`.
///
/// # Errors
///
/// Returns [`LlmError::BackendUnavailable`] if the provider's backend was not
/// compiled in, and [`LlmError::AuthenticationError`] if OpenAI is selected and
/// no API key can be resolved.
///
/// # Example
///
/// ```rust,no_run
/// use promptlib::llm::{create_provider, LlmConfig};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = create_provider(&LlmConfig::default_ollama())?;
/// # Ok(())
/// # }
/// ```
pub fn create_provider(config: &LlmConfig) -> Result<Box<dyn LlmProvider>, LlmError> {
    tracing::debug!(provider = %config.provider, model = %config.model, "creating LLM provider");

    match config.provider {
        ProviderKind::OpenAi => create_openai(config),
        ProviderKind::Ollama => create_ollama(config),
    }
}

#[cfg(feature = "openai")]
fn create_openai(config: &LlmConfig) -> Result<Box<dyn LlmProvider>, LlmError> {
    let api_key = config.resolve_api_key()?;
    let client = crate::llm::openai::OpenAiClient::new(api_key, config.base_url.clone())?;
    Ok(Box::new(client))
}

#[cfg(not(feature = "openai"))]
fn create_openai(_config: &LlmConfig) -> Result<Box<dyn LlmProvider>, LlmError> {
    Err(LlmError::BackendUnavailable {
        provider: ProviderKind::OpenAi,
        feature: "openai",
    })
}

#[cfg(feature = "ollama")]
fn create_ollama(config: &LlmConfig) -> Result<Box<dyn LlmProvider>, LlmError> {
    let client = crate::llm::ollama::OllamaClient::new(config.base_url.clone())?;
    Ok(Box::new(client))
}

#[cfg(not(feature = "ollama"))]
fn create_ollama(_config: &LlmConfig) -> Result<Box<dyn LlmProvider>, LlmError> {
    Err(LlmError::BackendUnavailable {
        provider: ProviderKind::Ollama,
        feature: "ollama",
    })
}
