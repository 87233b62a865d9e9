//! System-role templates used by the prompt and schema generators

use once_cell::sync::Lazy;

use crate::prompt::{Prompt, PromptCategory};

const WRITER_MODELS: [&str; 9] = [
    "gpt-4o",
    "gpt-3.5-turbo",
    "llama3.2",
    "llama3.1",
    "mistral",
    "mixtral",
    "codellama",
    "codellama:13b",
    "codellama:34b",
];

const AUDIO_MODELS: [&str; 6] = [
    "gpt-4o",
    "gpt-3.5-turbo",
    "llama3.2",
    "llama3.1",
    "mistral",
    "mixtral",
];

const SCHEMA_MODELS: [&str; 6] = [
    "gpt-4o-mini",
    "gpt-4o",
    "gpt-3.5-turbo",
    "codellama",
    "codellama:13b",
    "codellama:34b",
];

fn system_prompt(
    name: &str,
    description: &str,
    template: &str,
    tags: &[&str],
    models: &[&str],
) -> Prompt {
    Prompt::builder(name, PromptCategory::System, template)
        .with_description(description)
        .with_tags(tags.iter().copied())
        .with_models(models.iter().copied())
        .build()
        .expect("built-in system prompts declare no parameters")
}

/// Turns a task description or rough prompt into a full system prompt
pub static PROMPT_GENERATOR: Lazy<Prompt> = Lazy::new(|| {
    system_prompt(
        "prompt_generator",
        "Writes a detailed system prompt from a task description or existing prompt",
        include_str!("templates/prompt_generator.md"),
        &["system", "meta", "prompt-generation", "template"],
        &WRITER_MODELS,
    )
});

/// Variant of [`PROMPT_GENERATOR`] for realtime audio models
pub static AUDIO_PROMPT_GENERATOR: Lazy<Prompt> = Lazy::new(|| {
    system_prompt(
        "audio_prompt_generator",
        "Writes a system prompt for a realtime audio output model",
        include_str!("templates/audio_prompt_generator.md"),
        &["system", "meta", "prompt-generation", "template", "audio"],
        &AUDIO_MODELS,
    )
});

/// Applies a change description to an existing prompt
pub static PROMPT_EDITOR: Lazy<Prompt> = Lazy::new(|| {
    system_prompt(
        "prompt_editor",
        "Rewrites an existing prompt according to a change description",
        include_str!("templates/prompt_editor.md"),
        &["system", "meta", "prompt-editing", "template"],
        &WRITER_MODELS,
    )
});

/// Variant of [`PROMPT_EDITOR`] for realtime audio models
pub static AUDIO_PROMPT_EDITOR: Lazy<Prompt> = Lazy::new(|| {
    system_prompt(
        "audio_prompt_editor",
        "Rewrites a realtime audio model prompt according to a change description",
        include_str!("templates/audio_prompt_editor.md"),
        &["system", "meta", "prompt-editing", "template", "audio"],
        &AUDIO_MODELS,
    )
});

/// Produces a strict structured-output JSON schema
pub static SCHEMA_GENERATOR: Lazy<Prompt> = Lazy::new(|| {
    system_prompt(
        "schema_generator",
        "Produces a JSON schema for structured output from a description",
        include_str!("templates/schema_generator.md"),
        &["system", "meta", "schema-generation", "template"],
        &SCHEMA_MODELS,
    )
});

/// Produces a function-calling schema (`name`, `description`, `parameters`)
pub static FUNCTION_SCHEMA_GENERATOR: Lazy<Prompt> = Lazy::new(|| {
    system_prompt(
        "function_schema_generator",
        "Produces a function-calling schema from a description",
        include_str!("templates/function_schema_generator.md"),
        &["system", "meta", "function-schema", "template"],
        &SCHEMA_MODELS,
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editors_demand_reasoning_first() {
        for prompt in [&*PROMPT_EDITOR, &*AUDIO_PROMPT_EDITOR] {
            assert!(prompt.template().contains("<reasoning>"));
            assert!(prompt.template().trim_end().ends_with("should be <reasoning>]"));
        }
    }

    #[test]
    fn test_audio_variants_are_tagged() {
        assert!(AUDIO_PROMPT_GENERATOR.has_tag("audio"));
        assert!(AUDIO_PROMPT_EDITOR.has_tag("audio"));
        assert!(!PROMPT_GENERATOR.has_tag("audio"));
    }

    #[test]
    fn test_schema_templates_embed_json_without_placeholders() {
        assert!(SCHEMA_GENERATOR.placeholders().is_empty());
        assert!(FUNCTION_SCHEMA_GENERATOR.placeholders().is_empty());
        assert!(FUNCTION_SCHEMA_GENERATOR
            .template()
            .contains("\"name\": \"set_hyperparameters\""));
    }
}
