//! Mapping between abstraction types and OpenAI-specific types

use crate::llm::core::error::BackendError;
use crate::llm::core::types::{GenerateRequest, Message};

use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, OpenAiErrorResponse, OpenAiMessage,
};

/// Convert our abstraction request to OpenAI's request format
pub fn to_openai_request(request: GenerateRequest) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: request.model,
        messages: request.messages.into_iter().map(to_openai_message).collect(),
        temperature: request.sampling.temperature,
        max_tokens: request.sampling.max_tokens,
    }
}

fn to_openai_message(message: Message) -> OpenAiMessage {
    OpenAiMessage {
        role: message.role.as_str().to_string(),
        content: Some(message.content),
    }
}

/// Take the text of the first choice
pub fn from_openai_response(response: ChatCompletionResponse) -> Result<String, BackendError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(BackendError::EmptyResponse)
}

/// Turn a non-success body into the most specific error available
pub fn from_openai_error(status: u16, body: String) -> BackendError {
    match serde_json::from_str::<OpenAiErrorResponse>(&body) {
        Ok(envelope) => BackendError::Provider {
            code: envelope
                .error
                .code
                .or(envelope.error.error_type)
                .unwrap_or_else(|| status.to_string()),
            message: envelope.error.message,
        },
        Err(_) => BackendError::Http { status, body },
    }
}
