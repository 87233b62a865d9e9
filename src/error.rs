use thiserror::Error;

use crate::llm::LlmError;
use crate::prompt::PromptError;
use crate::schema::SchemaError;

/// Any failure raised by the generation helpers
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

pub type Result<T> = std::result::Result<T, Error>;
