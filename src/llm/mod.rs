//! LLM Abstraction Layer
//!
//! This module provides a single chat-completion interface over OpenAI and
//! Ollama. The backend is selected by [`LlmConfig::provider`] when an
//! [`LlmClient`] is built.

pub mod client;
pub mod core;
#[cfg(feature = "ollama")]
pub mod ollama;
#[cfg(feature = "openai")]
pub mod openai;

// Re-export commonly used types
pub use client::LlmClient;
pub use core::{
    config::{LlmConfig, ProviderKind, SamplingParams},
    error::{BackendError, LlmError},
    provider::{create_provider, LlmProvider},
    types::{GenerateRequest, Message, MessageRole, ToolDeclaration},
};
