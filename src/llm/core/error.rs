//! Error types for the LLM layer

use thiserror::Error;

use super::config::ProviderKind;

/// Errors that can occur when configuring or calling an LLM provider
#[derive(Debug, Error)]
pub enum LlmError {
    /// Provider name outside the supported set
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// The backend for this provider was not compiled into the crate
    #[error("Backend for {provider} is unavailable (enable the `{feature}` feature)")]
    BackendUnavailable {
        provider: ProviderKind,
        feature: &'static str,
    },

    /// No credential could be resolved for the backend
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Configuration values that could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The backend call failed
    #[error("Error generating completion with {provider}: {source}")]
    Generation {
        provider: ProviderKind,
        #[source]
        source: BackendError,
    },
}

/// Failures reported by a backend during a single chat-completion call
#[derive(Debug, Error)]
pub enum BackendError {
    /// Non-success HTTP status
    #[error("HTTP error (status {status}): {body}")]
    Http { status: u16, body: String },

    /// Connection, DNS or TLS failure before a status was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error object returned by the provider
    #[error("Provider error ({code}): {message}")]
    Provider { code: String, message: String },

    /// The response carried no completion text
    #[error("Response contained no completion text")]
    EmptyResponse,
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            BackendError::Http {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else if err.is_decode() {
            BackendError::Serialization(err.to_string())
        } else {
            BackendError::Transport(err.to_string())
        }
    }
}
