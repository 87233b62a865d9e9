//! Build a function schema by hand, from a Rust type, and from a description
//!
//! The last step calls a model; set `OPENAI_API_KEY` or run Ollama locally.

use promptlib::generate::generate_schema_with;
use promptlib::llm::LlmConfig;
use promptlib::schema::{Schema, SchemaProperty};
use schemars::JsonSchema;
use tracing_subscriber::EnvFilter;

/// Arguments for booking a meeting room
#[derive(JsonSchema)]
#[allow(dead_code)]
struct BookRoom {
    /// Room identifier, e.g. "4B"
    room: String,
    /// Start time in RFC 3339 format
    start: String,
    /// Length of the booking in minutes
    minutes: u32,
    /// People to invite
    attendees: Option<Vec<String>>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let weather = Schema::new(
        "get_weather",
        "Get current weather",
        [
            ("location", SchemaProperty::string("City name")),
            (
                "unit",
                SchemaProperty::string("Temperature unit").with_enum(["celsius", "fahrenheit"]),
            ),
        ],
    )
    .with_required(["location"]);
    weather.validate()?;
    println!("=== Hand-written ===\n{}\n", weather.to_json_pretty());

    let booking = Schema::for_type::<BookRoom>("book_room", "Reserve a meeting room")?;
    println!("=== Derived ===\n{}\n", booking.to_json_pretty());

    let config = if std::env::var("OPENAI_API_KEY").is_ok() {
        LlmConfig::default_openai()
    } else {
        LlmConfig::default_ollama()
    };
    let generated = generate_schema_with(
        "Send an SMS message to a phone number, optionally scheduling it for later",
        config,
    )
    .await?;
    let schema = Schema::from_value(&serde_json::Value::Object(generated))?;
    println!("=== Generated ===\n{}", schema.to_json_pretty());

    Ok(())
}
