//! Prompts for working with code

use once_cell::sync::Lazy;

use crate::prompt::{Prompt, PromptCategory};

use super::GENERAL_MODELS;

/// Structured code review covering bugs, performance, practice and security
pub static CODE_REVIEW: Lazy<Prompt> = Lazy::new(|| {
    Prompt::builder(
        "code_review",
        PromptCategory::Coding,
        "Please review the following code for:
1. Potential bugs
2. Performance issues
3. Best practices
4. Security concerns

Code to review:
{code}

Additional context:
{context}
",
    )
    .with_description("A prompt for conducting code reviews")
    .with_tags(["review", "code quality", "security"])
    .with_models(GENERAL_MODELS)
    .with_parameter("code", "The code to review")
    .with_parameter("context", "Additional context about the code")
    .build()
    .expect("built-in code_review prompt is valid")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_review_formats() {
        let text = CODE_REVIEW
            .format([("code", "unsafe { *ptr }"), ("context", "FFI boundary")])
            .unwrap();
        assert!(text.starts_with("Please review the following code for:"));
        assert!(text.contains("unsafe { *ptr }"));
        assert!(text.contains("FFI boundary"));
    }
}
