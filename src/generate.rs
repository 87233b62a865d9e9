//! Prompt and schema generation backed by an LLM
//!
//! Each operation pairs a built-in system template with caller text, makes a
//! single chat request and returns what the model produced. The `create_*` and
//! `edit_*` functions take [`GenerationOptions`] to override the backend
//! configuration or the system template; the `generate_*` functions are
//! shorthands that talk to OpenAI with a key from `OPENAI_API_KEY`.
//!
//! # Example
//!
//! ```no_run
//! use promptlib::generate::{create_prompt, GenerationOptions};
//! use promptlib::llm::LlmConfig;
//!
//! # async fn run() -> promptlib::Result<()> {
//! let options = GenerationOptions::new().with_config(LlmConfig::default_ollama());
//! let prompt = create_prompt("Summarize release notes for end users", options).await?;
//! println!("{}", prompt);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::llm::{LlmClient, LlmConfig, Message, ProviderKind, SamplingParams};
use crate::prompt::{Prompt, PromptCategory, PromptError};
use crate::prompts::{
    AUDIO_PROMPT_EDITOR, AUDIO_PROMPT_GENERATOR, FUNCTION_SCHEMA_GENERATOR, PROMPT_EDITOR,
    PROMPT_GENERATOR, SCHEMA_GENERATOR,
};
use crate::schema::SchemaError;

/// Name given to caller-supplied templates in formatting errors
const CUSTOM_TEMPLATE_NAME: &str = "custom_template";

static JSON_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)```json\b[ \t]*\r?\n?(.*?)```").expect("valid json fence pattern")
});

static ANY_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```[A-Za-z0-9_+-]*[ \t]*\r?\n?(.*?)```").expect("valid fence pattern")
});

/// Overrides for the `create_*` and `edit_*` operations
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    /// Backend to use; defaults to [`LlmConfig::default_openai`]
    pub config: Option<LlmConfig>,
    /// System template replacing the built-in one
    pub template: Option<String>,
    /// Values substituted into the system template before sending
    pub format_args: BTreeMap<String, String>,
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: LlmConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_format_arg(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.format_args.insert(name.into(), value.to_string());
        self
    }
}

/// Ask the model to write a prompt for `task`, or improve an existing prompt
pub async fn create_prompt(task: &str, options: GenerationOptions) -> Result<String> {
    run_exchange(&PROMPT_GENERATOR, task_message(task), options).await
}

/// Ask the model to revise `current_prompt` according to `change_description`
pub async fn edit_prompt(
    current_prompt: &str,
    change_description: &str,
    options: GenerationOptions,
) -> Result<String> {
    run_exchange(
        &PROMPT_EDITOR,
        change_message(current_prompt, change_description),
        options,
    )
    .await
}

/// [`create_prompt`] for prompts that will be spoken aloud
pub async fn create_audio_prompt(task: &str, options: GenerationOptions) -> Result<String> {
    run_exchange(&AUDIO_PROMPT_GENERATOR, task_message(task), options).await
}

/// [`edit_prompt`] for prompts that will be spoken aloud
pub async fn edit_audio_prompt(
    current_prompt: &str,
    change_description: &str,
    options: GenerationOptions,
) -> Result<String> {
    run_exchange(
        &AUDIO_PROMPT_EDITOR,
        change_message(current_prompt, change_description),
        options,
    )
    .await
}

/// Generate a prompt with an OpenAI `model`
pub async fn generate_prompt(task: &str, model: &str) -> Result<String> {
    create_prompt(task, openai_options(model)).await
}

/// Generate an audio prompt with an OpenAI `model`
pub async fn generate_audio_prompt(task: &str, model: &str) -> Result<String> {
    create_audio_prompt(task, openai_options(model)).await
}

/// Generate a function-calling schema from a description using an OpenAI `model`
///
/// The returned map has the `{name, description, parameters}` shape and can be
/// turned into a [`Schema`](crate::schema::Schema) with `Schema::from_value`.
pub async fn generate_schema(description: &str, model: &str) -> Result<Map<String, Value>> {
    generate_schema_with(description, LlmConfig::new(ProviderKind::OpenAi, model)).await
}

/// [`generate_schema`] against any configured backend
///
/// Sampling runs at temperature 0 regardless of `config.temperature`.
pub async fn generate_schema_with(
    description: &str,
    config: LlmConfig,
) -> Result<Map<String, Value>> {
    let client = LlmClient::new(config)?;
    schema_exchange(&client, &FUNCTION_SCHEMA_GENERATOR, description).await
}

/// Generate a structured-output JSON Schema from a description using an OpenAI `model`
pub async fn generate_json_schema(description: &str, model: &str) -> Result<Map<String, Value>> {
    generate_json_schema_with(description, LlmConfig::new(ProviderKind::OpenAi, model)).await
}

/// [`generate_json_schema`] against any configured backend
pub async fn generate_json_schema_with(
    description: &str,
    config: LlmConfig,
) -> Result<Map<String, Value>> {
    let client = LlmClient::new(config)?;
    schema_exchange(&client, &SCHEMA_GENERATOR, description).await
}

/// Pull the JSON payload out of a model response
///
/// Prefers a ```` ```json ```` fenced block, then any fenced block, then the
/// whole text. The result is trimmed.
pub fn extract_json_block(text: &str) -> &str {
    let (source, block) = if let Some(captures) = JSON_FENCE.captures(text) {
        ("json fence", captures.get(1))
    } else if let Some(captures) = ANY_FENCE.captures(text) {
        ("fence", captures.get(1))
    } else {
        ("raw", None)
    };

    let extracted = block.map_or(text, |m| m.as_str()).trim();
    tracing::trace!(source, len = extracted.len(), "extracted schema block");
    extracted
}

/// Parse a model response into a JSON object
///
/// # Errors
///
/// [`SchemaError::Parse`] if the extracted text is not JSON, and
/// [`SchemaError::InvalidShape`] if it is JSON but not an object.
pub fn parse_schema_response(text: &str) -> std::result::Result<Map<String, Value>, SchemaError> {
    match serde_json::from_str::<Value>(extract_json_block(text))? {
        Value::Object(map) => Ok(map),
        other => Err(SchemaError::InvalidShape(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn openai_options(model: &str) -> GenerationOptions {
    GenerationOptions::new().with_config(LlmConfig::new(ProviderKind::OpenAi, model))
}

fn task_message(task: &str) -> String {
    format!("Task, Goal, or Current Prompt:\n{}", task)
}

fn change_message(current_prompt: &str, change_description: &str) -> String {
    format!(
        "Current Prompt:\n{}\n\nChange Description:\n{}",
        current_prompt, change_description
    )
}

/// The system text to send: the override or built-in template, formatted when arguments are given
fn system_text(
    builtin: &Prompt,
    template: Option<&str>,
    format_args: &BTreeMap<String, String>,
) -> std::result::Result<String, PromptError> {
    let prompt = match template {
        Some(text) => Prompt::builder(CUSTOM_TEMPLATE_NAME, PromptCategory::System, text).build()?,
        None if format_args.is_empty() => return Ok(builtin.template().to_string()),
        None => builtin.clone(),
    };

    if format_args.is_empty() {
        Ok(prompt.template().to_string())
    } else {
        prompt.format(format_args)
    }
}

async fn run_exchange(
    builtin: &Prompt,
    user: String,
    options: GenerationOptions,
) -> Result<String> {
    let GenerationOptions {
        config,
        template,
        format_args,
    } = options;

    let system = system_text(builtin, template.as_deref(), &format_args)?;
    let client = LlmClient::new(config.unwrap_or_else(LlmConfig::default_openai))?;
    Ok(client.chat(&system, &user).await?)
}

async fn schema_exchange(
    client: &LlmClient,
    builtin: &Prompt,
    description: &str,
) -> Result<Map<String, Value>> {
    let sampling = SamplingParams {
        temperature: 0.0,
        max_tokens: client.config().max_tokens,
    };
    let messages = vec![
        Message::system(builtin.template()),
        Message::user(description),
    ];

    let response = client.generate_with_sampling(messages, sampling).await?;
    Ok(parse_schema_response(&response)?)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::Error;
    use crate::llm::client::testing::ScriptedProvider;
    use crate::llm::{GenerateRequest, LlmError, MessageRole};
    use serde_json::json;

    fn scripted(reply: &str) -> (LlmClient, Arc<Mutex<Vec<GenerateRequest>>>) {
        let (provider, requests) = ScriptedProvider::replying(reply);
        let config = LlmConfig::new(ProviderKind::Ollama, "llama3.2").with_max_tokens(512);
        let client = LlmClient::with_provider(config, Box::new(provider)).unwrap();
        (client, requests)
    }

    #[test]
    fn test_extract_json_fence() {
        let text = "Here:\n```json\n{\"name\":\"f\",\"description\":\"d\",\"parameters\":{\"type\":\"object\",\"properties\":{}}}\n```";
        let map = parse_schema_response(text).unwrap();
        assert_eq!(
            Value::Object(map),
            json!({
                "name": "f",
                "description": "d",
                "parameters": {"type": "object", "properties": {}}
            })
        );
    }

    #[test]
    fn test_json_fence_preferred_over_earlier_fence() {
        let text = "```text\nnot this\n```\nthen\n```JSON\n{\"a\": 1}\n```";
        assert_eq!(extract_json_block(text), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_untagged_fence() {
        assert_eq!(extract_json_block("Sure!\n```\n{\"a\": 2}\n```\nDone"), "{\"a\": 2}");
        assert_eq!(extract_json_block("```{\"a\": 3}```"), "{\"a\": 3}");
    }

    #[test]
    fn test_extract_raw_text() {
        assert_eq!(extract_json_block("  {\"a\": 4}\n"), "{\"a\": 4}");
    }

    #[test]
    fn test_parse_failure_includes_detail() {
        let err = parse_schema_response("```json\n{not json}\n```").unwrap_err();
        match err {
            SchemaError::Parse { detail, .. } => assert!(detail.contains("line 1")),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_is_invalid_shape() {
        assert!(matches!(
            parse_schema_response("[1, 2]"),
            Err(SchemaError::InvalidShape(ref msg)) if msg.contains("an array")
        ));
    }

    #[test]
    fn test_user_message_shapes() {
        assert_eq!(task_message("Write a haiku"), "Task, Goal, or Current Prompt:\nWrite a haiku");
        assert_eq!(
            change_message("Old prompt", "Make it shorter"),
            "Current Prompt:\nOld prompt\n\nChange Description:\nMake it shorter"
        );
    }

    #[test]
    fn test_system_text_defaults_to_builtin() {
        let text = system_text(&PROMPT_GENERATOR, None, &BTreeMap::new()).unwrap();
        assert_eq!(text, PROMPT_GENERATOR.template());
    }

    #[test]
    fn test_system_text_formats_custom_template() {
        let args = BTreeMap::from([("tone".to_string(), "formal".to_string())]);
        let text = system_text(&PROMPT_GENERATOR, Some("Write in a {tone} tone."), &args).unwrap();
        assert_eq!(text, "Write in a formal tone.");
    }

    #[test]
    fn test_system_text_sends_unformatted_template_without_args() {
        let text =
            system_text(&PROMPT_GENERATOR, Some("Keep {tone} as is"), &BTreeMap::new()).unwrap();
        assert_eq!(text, "Keep {tone} as is");
    }

    #[test]
    fn test_system_text_missing_argument() {
        let args = BTreeMap::from([("other".to_string(), "x".to_string())]);
        let err = system_text(&PROMPT_GENERATOR, Some("Use {tone}"), &args).unwrap_err();
        assert_eq!(
            err,
            PromptError::MissingParameter {
                prompt: CUSTOM_TEMPLATE_NAME.to_string(),
                parameter: "tone".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_schema_exchange_uses_zero_temperature() {
        let (client, requests) = scripted(
            "```json\n{\"name\": \"get_weather\", \"description\": \"d\", \"parameters\": {\"type\": \"object\", \"properties\": {}}}\n```",
        );

        let map = schema_exchange(&client, &FUNCTION_SCHEMA_GENERATOR, "weather lookup")
            .await
            .unwrap();
        assert_eq!(map["name"], "get_weather");

        let requests = requests.lock().unwrap();
        let request = &requests[0];
        assert_eq!(request.sampling.temperature, 0.0);
        assert_eq!(request.sampling.max_tokens, Some(512));
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert_eq!(request.messages[0].content, FUNCTION_SCHEMA_GENERATOR.template());
        assert_eq!(request.messages[1].content, "weather lookup");
    }

    #[tokio::test]
    async fn test_schema_exchange_reports_unparsable_reply() {
        let (client, _) = scripted("I cannot help with that.");
        let err = schema_exchange(&client, &SCHEMA_GENERATOR, "anything")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Schema(SchemaError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_schema_exchange_propagates_backend_failure() {
        let config = LlmConfig::default_ollama();
        let client =
            LlmClient::with_provider(config, Box::new(ScriptedProvider::failing(500))).unwrap();
        let err = schema_exchange(&client, &SCHEMA_GENERATOR, "anything")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Llm(LlmError::Generation { .. })));
    }

    #[tokio::test]
    async fn test_custom_template_error_precedes_client_creation() {
        // Formatting fails before any backend is contacted
        let options = GenerationOptions::new()
            .with_config(LlmConfig::default_ollama())
            .with_template("Hello {name}")
            .with_format_arg("other", 1);
        let err = create_prompt("task", options).await.unwrap_err();
        assert!(matches!(err, Error::Prompt(PromptError::MissingParameter { .. })));
    }
}
