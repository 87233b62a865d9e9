//! Registry behaviour through the public API

use promptlib::prompt::PromptError;
use promptlib::prompts::{render_meta_prompt, CODE_REVIEW};
use promptlib::{Prompt, PromptCategory, PromptManager};
use serde_json::json;

fn sample_prompt() -> Prompt {
    Prompt::builder(
        "test_prompt",
        PromptCategory::Coding,
        "This is a test prompt with {variable}",
    )
    .with_description("A test prompt")
    .with_tags(["test", "example"])
    .with_models(["gpt-3.5-turbo"])
    .with_parameter("variable", "A test variable")
    .build()
    .unwrap()
}

#[test]
fn add_and_query_prompt() {
    let mut manager = PromptManager::new();
    manager.add_prompt(sample_prompt());

    assert_eq!(manager.get_prompt("test_prompt"), Some(&sample_prompt()));
    assert_eq!(
        manager.get_prompts_by_category(PromptCategory::Coding),
        vec![&sample_prompt()]
    );
    assert!(manager
        .get_prompts_by_category(PromptCategory::Writing)
        .is_empty());
    assert_eq!(manager.get_prompts_by_tag("test").len(), 1);
    assert!(manager.get_prompts_by_tag("nonexistent").is_empty());
    assert_eq!(manager.get_prompts_for_model("gpt-3.5-turbo").len(), 1);
    assert!(manager.get_prompts_for_model("gpt-4").is_empty());
}

#[test]
fn tag_lookup_matches_whole_tags_only() {
    let mut manager = PromptManager::new();
    let reviewer = Prompt::builder("reviewer", PromptCategory::Coding, "Review this code")
        .with_tags(["code quality"])
        .build()
        .unwrap();
    manager.add_prompt(reviewer.clone());

    assert!(manager.get_prompts_by_tag("code").is_empty());
    assert!(manager.get_prompts_by_tag("quality").is_empty());
    assert!(manager.get_prompts_by_tag("Code Quality").is_empty());
    assert_eq!(manager.get_prompts_by_tag("code quality"), vec![&reviewer]);
}

#[test]
fn distinct_names_are_stored_independently() {
    let mut manager = PromptManager::new();
    let first = Prompt::builder("first", PromptCategory::Chat, "Hello {who}")
        .with_parameter("who", "Person to greet")
        .build()
        .unwrap();
    let second = Prompt::builder("second", PromptCategory::Writing, "Write about {topic}")
        .with_parameter("topic", "Subject")
        .build()
        .unwrap();

    assert!(manager.add_prompt(first.clone()).is_none());
    assert!(manager.add_prompt(second.clone()).is_none());

    assert_eq!(manager.len(), 2);
    assert_eq!(manager.get_prompt("first"), Some(&first));
    assert_eq!(manager.get_prompt("second"), Some(&second));
    assert_eq!(
        manager.get_prompts_by_category(PromptCategory::Chat),
        vec![&first]
    );
}

#[test]
fn format_substitutes_arguments() {
    let text = sample_prompt().format([("variable", "value")]).unwrap();
    assert_eq!(text, "This is a test prompt with value");

    let extra = sample_prompt()
        .format([("variable", "value"), ("unused", "ignored")])
        .unwrap();
    assert_eq!(extra, text);
}

#[test]
fn format_without_argument_fails() {
    let err = sample_prompt().format(Vec::<(&str, &str)>::new()).unwrap_err();
    assert_eq!(
        err,
        PromptError::MissingParameter {
            prompt: "test_prompt".to_string(),
            parameter: "variable".to_string(),
        }
    );
}

#[test]
fn prompt_deserializes_with_defaults() {
    let prompt: Prompt = serde_json::from_value(json!({
        "name": "greeting",
        "category": "chat",
        "template": "Hello {who}",
        "parameters": {"who": "Person to greet"}
    }))
    .unwrap();

    assert_eq!(prompt.version(), "1.0");
    assert!(prompt.tags().is_empty());
    assert_eq!(prompt.format([("who", "world")]).unwrap(), "Hello world");
}

#[test]
fn prompt_rejects_undocumented_parameter_on_deserialize() {
    let result: Result<Prompt, _> = serde_json::from_value(json!({
        "name": "greeting",
        "category": "chat",
        "template": "Hello there",
        "parameters": {"who": "Person to greet"}
    }));
    assert!(result.unwrap_err().to_string().contains("never uses"));
}

#[test]
fn builtin_library_is_queryable() {
    let manager = PromptManager::with_builtins();
    let review = manager.get_prompt("code_review").unwrap();
    assert_eq!(review, &*CODE_REVIEW);

    let rendered = render_meta_prompt("Summarize logs", None, None, None).unwrap();
    assert!(rendered.contains("Summarize logs"));
    assert!(rendered.contains("Target audience: LLM model"));
    assert!(rendered.contains("Expected output format: Free text response"));
}
