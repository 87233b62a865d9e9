//! Ollama-specific request and response types
//!
//! These types map directly to the `/api/chat` endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaChatRequest {
    /// Model tag, e.g. "llama3.2"
    pub model: String,
    /// Array of messages in the conversation
    pub messages: Vec<OllamaMessage>,
    /// Always false; one JSON object per response
    pub stream: bool,
    /// Sampling options
    pub options: OllamaOptions,
}

/// A single message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaMessage {
    pub role: String,
    pub content: String,
}

/// Model options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaOptions {
    pub temperature: f32,
    /// Token cap (Ollama's name for max_tokens)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

/// Non-streaming chat response
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    /// Generated message; absent when the body is an error
    #[serde(default)]
    pub message: Option<OllamaMessage>,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub eval_count: Option<u32>,
    #[serde(default)]
    pub prompt_eval_count: Option<u32>,
    /// Error message (e.g. unknown model)
    #[serde(default)]
    pub error: Option<String>,
}
