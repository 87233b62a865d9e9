//! Error types for prompt templates

use thiserror::Error;

/// Errors raised while building or formatting a [`Prompt`](super::Prompt)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// A placeholder in the template had no matching argument
    #[error("Prompt '{prompt}' is missing a value for parameter '{parameter}'")]
    MissingParameter { prompt: String, parameter: String },

    /// A documented parameter does not occur as a placeholder in the template
    #[error("Prompt '{prompt}' documents parameter '{parameter}' which its template never uses")]
    UndeclaredParameter { prompt: String, parameter: String },
}
