// Prompt data model and registry
pub mod prompt;
pub mod prompts;

// Function-calling schemas
pub mod schema;

// LLM abstraction layer
pub mod llm;

// LLM-backed prompt and schema generation
pub mod generate;

pub mod error;

pub use error::{Error, Result};
pub use generate::{
    create_audio_prompt, create_prompt, edit_audio_prompt, edit_prompt, generate_audio_prompt,
    generate_json_schema, generate_prompt, generate_schema, GenerationOptions,
};
pub use llm::{LlmClient, LlmConfig, ProviderKind};
pub use prompt::{Prompt, PromptCategory, PromptManager};
pub use schema::{Schema, SchemaProperty};
