//! OpenAI-specific request and response types
//!
//! These types map directly to the chat completions API schema.

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Array of messages in the conversation
    pub messages: Vec<OpenAiMessage>,
    /// Temperature (0.0-2.0)
    pub temperature: f32,
    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A single message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiMessage {
    /// Role: "system", "user", "assistant" or "tool"
    pub role: String,
    /// Text content (null for tool-call-only assistant messages)
    #[serde(default)]
    pub content: Option<String>,
}

/// Successful response body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion ID
    #[serde(default)]
    pub id: Option<String>,
    /// Generated choices
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    /// Token accounting
    #[serde(default)]
    pub usage: Option<OpenAiUsage>,
}

/// A single completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// Position in the choices array
    #[serde(default)]
    pub index: u32,
    /// Generated message
    pub message: OpenAiMessage,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage information
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OpenAiUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Error envelope returned with non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiErrorResponse {
    pub error: OpenAiErrorData,
}

/// Error details
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiErrorData {
    /// Human readable message
    pub message: String,
    /// Error type, e.g. "invalid_request_error"
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Machine readable code, e.g. "invalid_api_key"
    #[serde(default)]
    pub code: Option<String>,
}
