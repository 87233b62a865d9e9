//! A prompt for writing prompts

use once_cell::sync::Lazy;

use crate::prompt::{Prompt, PromptCategory, PromptError};

pub const DEFAULT_REQUIREMENTS: &str = "None specified";
pub const DEFAULT_AUDIENCE: &str = "LLM model";
pub const DEFAULT_OUTPUT_FORMAT: &str = "Free text response";

pub static META_PROMPT: Lazy<Prompt> = Lazy::new(|| {
    Prompt::builder(
        "meta_prompt",
        PromptCategory::System,
        "Create a prompt that achieves the following objective:
{objective}

The prompt should:
1. Be clear and specific
2. Include necessary context and constraints
3. Guide the model towards the desired output format
4. Include any relevant examples if needed

Additional requirements:
{requirements}

Target audience: {audience}
Expected output format: {output_format}",
    )
    .with_description("A meta prompt for generating other prompts")
    .with_tags(["meta", "prompt-generation"])
    .with_models(["gpt-4", "gpt-3.5-turbo"])
    .with_parameter("objective", "The main goal of the prompt to be generated")
    .with_parameter("requirements", "Any specific requirements or constraints")
    .with_parameter(
        "audience",
        "The intended audience (e.g., 'LLM model', 'human reviewer')",
    )
    .with_parameter("output_format", "Expected format of the response")
    .build()
    .expect("built-in meta_prompt is valid")
});

/// Fill in [`META_PROMPT`] locally, without calling a model
///
/// `None` arguments fall back to "None specified", "LLM model" and
/// "Free text response".
pub fn render_meta_prompt(
    objective: &str,
    requirements: Option<&str>,
    audience: Option<&str>,
    output_format: Option<&str>,
) -> Result<String, PromptError> {
    META_PROMPT.format([
        ("objective", objective),
        ("requirements", requirements.unwrap_or(DEFAULT_REQUIREMENTS)),
        ("audience", audience.unwrap_or(DEFAULT_AUDIENCE)),
        ("output_format", output_format.unwrap_or(DEFAULT_OUTPUT_FORMAT)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_meta_prompt_defaults() {
        let text = render_meta_prompt("Summarise RFCs", None, None, None).unwrap();
        assert!(text.contains("Summarise RFCs"));
        assert!(text.contains("Additional requirements:\nNone specified"));
        assert!(text.contains("Target audience: LLM model"));
        assert!(text.ends_with("Expected output format: Free text response"));
    }

    #[test]
    fn test_render_meta_prompt_overrides() {
        let text = render_meta_prompt(
            "Triage bug reports",
            Some("Under 200 words"),
            Some("human reviewer"),
            Some("JSON"),
        )
        .unwrap();
        assert!(text.contains("Under 200 words"));
        assert!(text.contains("Target audience: human reviewer"));
        assert!(text.contains("Expected output format: JSON"));
    }
}
