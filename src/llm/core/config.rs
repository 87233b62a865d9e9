//! Provider selection and generation configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::LlmError;

/// Environment variable holding the default OpenAI API key
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variables read by [`LlmConfig::from_env`]
pub const PROVIDER_ENV: &str = "PROMPTLIB_PROVIDER";
pub const MODEL_ENV: &str = "PROMPTLIB_MODEL";
pub const BASE_URL_ENV: &str = "PROMPTLIB_BASE_URL";
pub const TEMPERATURE_ENV: &str = "PROMPTLIB_TEMPERATURE";
pub const MAX_TOKENS_ENV: &str = "PROMPTLIB_MAX_TOKENS";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Supported LLM backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProviderKind {
    /// OpenAI chat completions (or any compatible endpoint via `base_url`)
    OpenAi,
    /// Local Ollama daemon
    Ollama,
}

impl ProviderKind {
    /// Get the provider identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Ollama => "ollama",
        }
    }

    /// Model used when no model is configured explicitly
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-4o",
            ProviderKind::Ollama => "llama3.2",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "ollama" => Ok(ProviderKind::Ollama),
            _ => Err(LlmError::UnsupportedProvider(s.to_string())),
        }
    }
}

impl TryFrom<String> for ProviderKind {
    type Error = LlmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProviderKind> for String {
    fn from(kind: ProviderKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Sampling parameters sent with each request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Randomness (0.0 = deterministic)
    pub temperature: f32,
    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl SamplingParams {
    /// Create parameters with the given temperature and no token cap
    pub fn new(temperature: f32) -> Self {
        Self {
            temperature,
            max_tokens: None,
        }
    }

    /// Set the token cap
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE)
    }
}

/// Configuration for an [`LlmClient`](crate::llm::LlmClient)
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Which backend to dispatch to
    pub provider: ProviderKind,
    /// Backend model identifier
    pub model: String,
    /// Explicit API key; falls back to `OPENAI_API_KEY` for OpenAI
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Endpoint override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum number of tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

impl LlmConfig {
    /// Create a configuration for the given provider and model
    pub fn new(provider: ProviderKind, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            api_key: None,
            base_url: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
        }
    }

    /// OpenAI with `gpt-4o`, key taken from `OPENAI_API_KEY`
    pub fn default_openai() -> Self {
        Self {
            api_key: std::env::var(OPENAI_API_KEY_ENV).ok(),
            ..Self::new(ProviderKind::OpenAi, ProviderKind::OpenAi.default_model())
        }
    }

    /// Local Ollama with `llama3.2`, no key
    pub fn default_ollama() -> Self {
        Self::new(ProviderKind::Ollama, ProviderKind::Ollama.default_model())
    }

    /// Build a configuration from `PROMPTLIB_*` environment variables
    ///
    /// The provider defaults to OpenAI and the model to the provider default.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::UnsupportedProvider`] for an unknown provider name and
    /// [`LlmError::InvalidConfig`] for unparsable numeric values.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable lookup
    pub fn from_env_with<F>(lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup(PROVIDER_ENV) {
            Some(name) => name.parse()?,
            None => ProviderKind::OpenAi,
        };
        let model = lookup(MODEL_ENV).unwrap_or_else(|| provider.default_model().to_string());

        let mut config = Self::new(provider, model);
        config.api_key = lookup(OPENAI_API_KEY_ENV);
        config.base_url = lookup(BASE_URL_ENV);

        if let Some(raw) = lookup(TEMPERATURE_ENV) {
            config.temperature = raw.trim().parse().map_err(|_| {
                LlmError::InvalidConfig(format!("{} is not a number: {}", TEMPERATURE_ENV, raw))
            })?;
        }
        if let Some(raw) = lookup(MAX_TOKENS_ENV) {
            let max_tokens = raw.trim().parse().map_err(|_| {
                LlmError::InvalidConfig(format!(
                    "{} is not a positive integer: {}",
                    MAX_TOKENS_ENV, raw
                ))
            })?;
            config.max_tokens = Some(max_tokens);
        }

        Ok(config)
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the endpoint override
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the token cap
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sampling parameters derived from this configuration
    pub fn sampling(&self) -> SamplingParams {
        SamplingParams {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Resolve the API key: explicit value, then `OPENAI_API_KEY`, then fail
    pub fn resolve_api_key(&self) -> Result<String, LlmError> {
        self.resolve_api_key_with(|key| std::env::var(key).ok())
    }

    /// Same as [`resolve_api_key`](Self::resolve_api_key) with an explicit variable lookup
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<String, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| lookup(OPENAI_API_KEY_ENV).filter(|key| !key.is_empty()))
            .ok_or_else(|| {
                LlmError::AuthenticationError(format!(
                    "no API key configured for {} and {} is not set",
                    self.provider, OPENAI_API_KEY_ENV
                ))
            })
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("openai".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!("Ollama".parse::<ProviderKind>().unwrap(), ProviderKind::Ollama);

        let err = "anthropic".parse::<ProviderKind>().unwrap_err();
        assert!(matches!(err, LlmError::UnsupportedProvider(ref name) if name == "anthropic"));
    }

    #[test]
    fn test_provider_serialization() {
        assert_eq!(serde_json::to_string(&ProviderKind::OpenAi).unwrap(), "\"openai\"");
        let kind: ProviderKind = serde_json::from_str("\"ollama\"").unwrap();
        assert_eq!(kind, ProviderKind::Ollama);
        assert!(serde_json::from_str::<ProviderKind>("\"gemini\"").is_err());
    }

    #[test]
    fn test_config_new_defaults() {
        let config = LlmConfig::new(ProviderKind::OpenAi, "gpt-4o-mini");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, 0.7);
        assert!(config.api_key.is_none());
        assert!(config.base_url.is_none());
        assert!(config.max_tokens.is_none());
    }

    #[test]
    fn test_default_ollama() {
        let config = LlmConfig::default_ollama();
        assert_eq!(config.provider, ProviderKind::Ollama);
        assert_eq!(config.model, "llama3.2");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_default_openai_model() {
        let config = LlmConfig::default_openai();
        assert_eq!(config.provider, ProviderKind::OpenAi);
        assert_eq!(config.model, "gpt-4o");
    }

    #[test]
    fn test_config_builder() {
        let config = LlmConfig::new(ProviderKind::Ollama, "mistral")
            .with_base_url("http://gpu-box:11434")
            .with_temperature(0.2)
            .with_max_tokens(512);

        assert_eq!(config.base_url.as_deref(), Some("http://gpu-box:11434"));
        assert_eq!(
            config.sampling(),
            SamplingParams::new(0.2).with_max_tokens(512)
        );
    }

    #[test]
    fn test_resolve_api_key_prefers_explicit() {
        let config = LlmConfig::new(ProviderKind::OpenAi, "gpt-4o").with_api_key("sk-explicit");
        let key = config
            .resolve_api_key_with(env(&[(OPENAI_API_KEY_ENV, "sk-env")]))
            .unwrap();
        assert_eq!(key, "sk-explicit");
    }

    #[test]
    fn test_resolve_api_key_falls_back_to_env() {
        let config = LlmConfig::new(ProviderKind::OpenAi, "gpt-4o");
        let key = config
            .resolve_api_key_with(env(&[(OPENAI_API_KEY_ENV, "sk-env")]))
            .unwrap();
        assert_eq!(key, "sk-env");
    }

    #[test]
    fn test_resolve_api_key_fails_without_any_source() {
        let config = LlmConfig::new(ProviderKind::OpenAi, "gpt-4o").with_api_key("");
        let err = config.resolve_api_key_with(env(&[])).unwrap_err();
        assert!(matches!(err, LlmError::AuthenticationError(_)));
    }

    #[test]
    fn test_from_env_defaults() {
        let config = LlmConfig::from_env_with(env(&[])).unwrap();
        assert_eq!(config.provider, ProviderKind::OpenAi);
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_from_env_reads_all_values() {
        let config = LlmConfig::from_env_with(env(&[
            (PROVIDER_ENV, "ollama"),
            (MODEL_ENV, "mixtral"),
            (BASE_URL_ENV, "http://127.0.0.1:11434"),
            (TEMPERATURE_ENV, "0.1"),
            (MAX_TOKENS_ENV, "256"),
        ]))
        .unwrap();

        assert_eq!(config.provider, ProviderKind::Ollama);
        assert_eq!(config.model, "mixtral");
        assert_eq!(config.base_url.as_deref(), Some("http://127.0.0.1:11434"));
        assert_eq!(config.temperature, 0.1);
        assert_eq!(config.max_tokens, Some(256));
    }

    #[test]
    fn test_from_env_rejects_unknown_provider() {
        let err = LlmConfig::from_env_with(env(&[(PROVIDER_ENV, "bard")])).unwrap_err();
        assert!(matches!(err, LlmError::UnsupportedProvider(_)));
    }

    #[test]
    fn test_from_env_rejects_bad_numbers() {
        let err = LlmConfig::from_env_with(env(&[(TEMPERATURE_ENV, "warm")])).unwrap_err();
        assert!(matches!(err, LlmError::InvalidConfig(_)));

        let err = LlmConfig::from_env_with(env(&[(MAX_TOKENS_ENV, "-5")])).unwrap_err();
        assert!(matches!(err, LlmError::InvalidConfig(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = LlmConfig::new(ProviderKind::OpenAi, "gpt-4o").with_api_key("sk-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_config_serialization_skips_api_key() {
        let config = LlmConfig::new(ProviderKind::OpenAi, "gpt-4o").with_api_key("sk-secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"provider\":\"openai\""));
        assert!(!json.contains("sk-secret"));
        assert!(!json.contains("\"max_tokens\""));
    }

    #[test]
    fn test_config_deserialization() {
        let json = r#"{"provider":"ollama","model":"llama3.1"}"#;
        let config: LlmConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.provider, ProviderKind::Ollama);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
    }
}
