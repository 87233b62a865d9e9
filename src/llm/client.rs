//! Provider-agnostic chat client

use super::core::{
    config::{LlmConfig, SamplingParams},
    error::LlmError,
    provider::{create_provider, LlmProvider},
    types::{GenerateRequest, Message},
};

/// A configured connection to one LLM backend
///
/// The backend is chosen once, when the client is built, from
/// `config.provider`; a client never switches providers.
pub struct LlmClient {
    config: LlmConfig,
    provider: Box<dyn LlmProvider>,
}

impl LlmClient {
    /// Create a client for the provider named in `config`
    ///
    /// # Errors
    ///
    /// Fails with [`LlmError::BackendUnavailable`] if that backend was compiled
    /// out, or [`LlmError::AuthenticationError`] if no API key can be resolved.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let provider = create_provider(&config)?;
        Ok(Self { config, provider })
    }

    /// Create a client around an already constructed provider
    ///
    /// # Errors
    ///
    /// Fails with [`LlmError::InvalidConfig`] if `provider` is not the
    /// backend named by `config.provider`.
    pub fn with_provider(
        config: LlmConfig,
        provider: Box<dyn LlmProvider>,
    ) -> Result<Self, LlmError> {
        if provider.kind() != config.provider {
            return Err(LlmError::InvalidConfig(format!(
                "config selects {} but the provider is {}",
                config.provider,
                provider.kind()
            )));
        }
        Ok(Self { config, provider })
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Generate a completion using the configured model and sampling parameters
    pub async fn generate(&self, messages: Vec<Message>) -> Result<String, LlmError> {
        self.generate_with_sampling(messages, self.config.sampling()).await
    }

    /// Generate a completion with sampling parameters overriding the configuration
    ///
    /// Performs a single round trip; backend failures are returned as
    /// [`LlmError::Generation`] without retrying.
    pub async fn generate_with_sampling(
        &self,
        messages: Vec<Message>,
        sampling: SamplingParams,
    ) -> Result<String, LlmError> {
        let request = GenerateRequest::new(self.config.model.clone(), messages, sampling);

        self.provider
            .generate(request)
            .await
            .map_err(|source| LlmError::Generation {
                provider: self.provider.kind(),
                source,
            })
    }

    /// Send a system/user exchange
    pub async fn chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String, LlmError> {
        self.generate(vec![Message::system(system_prompt), Message::user(user_prompt)])
            .await
    }
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient")
            .field("config", &self.config)
            .field("provider", &self.provider.kind())
            .finish()
    }
}
