//! Core types for the LLM abstraction layer

use serde::{Deserialize, Serialize};

use super::config::SamplingParams;

/// Request to generate a chat completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Backend model identifier
    pub model: String,
    /// Ordered conversation
    pub messages: Vec<Message>,
    /// Generation parameters
    pub sampling: SamplingParams,
}

impl GenerateRequest {
    /// Create a request for `model` with the given messages and sampling parameters
    pub fn new(model: impl Into<String>, messages: Vec<Message>, sampling: SamplingParams) -> Self {
        Self {
            model: model.into(),
            messages,
            sampling,
        }
    }
}

/// A single message in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: MessageRole,
    /// Text content
    pub content: String,
}

impl Message {
    /// Create a new message
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a new system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create a new assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instructions that steer the model
    System,
    /// Human input
    User,
    /// Model output
    Assistant,
    /// Tool execution result
    Tool,
}

impl MessageRole {
    /// Wire name shared by both supported backends
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::Tool => "tool",
        }
    }
}

/// Declaration of a function the model can call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDeclaration {
    /// Function name
    pub name: String,
    /// What the tool does
    pub description: String,
    /// JSON Schema for parameters
    pub input_schema: serde_json::Value,
}
