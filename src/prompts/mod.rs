//! Built-in prompt library
//!
//! Every prompt here is built lazily on first use and validated by the same
//! builder user prompts go through.

pub mod coding;
pub mod meta;
pub mod philosophical;
pub mod system;

pub use coding::CODE_REVIEW;
pub use meta::{render_meta_prompt, META_PROMPT};
pub use philosophical::AI_ETHICS_EXPLORATION;
pub use system::{
    AUDIO_PROMPT_EDITOR, AUDIO_PROMPT_GENERATOR, FUNCTION_SCHEMA_GENERATOR, PROMPT_EDITOR,
    PROMPT_GENERATOR, SCHEMA_GENERATOR,
};

use crate::prompt::{Prompt, PromptManager};

/// Models the general-purpose built-ins are known to work with
pub(crate) const GENERAL_MODELS: [&str; 9] = [
    "gpt-4",
    "gpt-3.5-turbo",
    "llama3.2",
    "llama3.1",
    "mistral",
    "mixtral",
    "codellama",
    "codellama:13b",
    "codellama:34b",
];

/// Copies of every built-in prompt
pub fn builtin_prompts() -> Vec<Prompt> {
    [
        &*CODE_REVIEW,
        &*META_PROMPT,
        &*AI_ETHICS_EXPLORATION,
        &*PROMPT_GENERATOR,
        &*AUDIO_PROMPT_GENERATOR,
        &*PROMPT_EDITOR,
        &*AUDIO_PROMPT_EDITOR,
        &*SCHEMA_GENERATOR,
        &*FUNCTION_SCHEMA_GENERATOR,
    ]
    .into_iter()
    .cloned()
    .collect()
}

impl PromptManager {
    /// Registry pre-loaded with [`builtin_prompts`]
    pub fn with_builtins() -> Self {
        builtin_prompts().into_iter().collect()
    }
}
