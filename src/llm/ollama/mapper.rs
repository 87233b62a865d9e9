//! Mapping between abstraction types and Ollama-specific types

use crate::llm::core::error::BackendError;
use crate::llm::core::types::GenerateRequest;

use super::types::{OllamaChatRequest, OllamaChatResponse, OllamaMessage, OllamaOptions};

/// Convert our abstraction request to Ollama's request format
pub fn to_ollama_request(request: GenerateRequest) -> OllamaChatRequest {
    OllamaChatRequest {
        model: request.model,
        messages: request
            .messages
            .into_iter()
            .map(|message| OllamaMessage {
                role: message.role.as_str().to_string(),
                content: message.content,
            })
            .collect(),
        stream: false,
        options: OllamaOptions {
            temperature: request.sampling.temperature,
            num_predict: request.sampling.max_tokens,
        },
    }
}

/// Take the assistant message text, surfacing an embedded error first
pub fn from_ollama_response(response: OllamaChatResponse) -> Result<String, BackendError> {
    if let Some(message) = response.error {
        return Err(BackendError::Provider {
            code: "ollama".to_string(),
            message,
        });
    }

    response
        .message
        .map(|message| message.content)
        .ok_or(BackendError::EmptyResponse)
}

/// Turn a non-success body into the most specific error available
pub fn from_ollama_error(status: u16, body: String) -> BackendError {
    match serde_json::from_str::<OllamaChatResponse>(&body) {
        Ok(OllamaChatResponse {
            error: Some(message),
            ..
        }) => BackendError::Provider {
            code: status.to_string(),
            message,
        },
        _ => BackendError::Http { status, body },
    }
}
