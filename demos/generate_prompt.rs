//! Generate and then refine a prompt
//!
//! Uses OpenAI when `OPENAI_API_KEY` is set, otherwise a local Ollama server.
//!
//! ```sh
//! RUST_LOG=promptlib=debug cargo run --example generate_prompt -- "Summarize support tickets"
//! ```

use promptlib::generate::{create_prompt, edit_prompt, GenerationOptions};
use promptlib::llm::LlmConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let task = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Classify customer emails by urgency".to_string());

    let config = if std::env::var("OPENAI_API_KEY").is_ok() {
        LlmConfig::default_openai()
    } else {
        LlmConfig::default_ollama()
    };
    tracing::info!(provider = %config.provider, model = %config.model, "using backend");

    let prompt = create_prompt(&task, GenerationOptions::new().with_config(config.clone())).await?;
    println!("=== Generated prompt ===\n{}\n", prompt);

    let revised = edit_prompt(
        &prompt,
        "Make it shorter and ask for JSON output",
        GenerationOptions::new().with_config(config),
    )
    .await?;
    println!("=== Revised prompt ===\n{}", revised);

    Ok(())
}
