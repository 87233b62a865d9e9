//! Open-ended philosophical prompts

use once_cell::sync::Lazy;

use crate::prompt::{Prompt, PromptCategory};

use super::GENERAL_MODELS;

/// Reflection on AI capability within ethical limits; takes no parameters
pub static AI_ETHICS_EXPLORATION: Lazy<Prompt> = Lazy::new(|| {
    Prompt::builder(
        "ai_ethics_exploration",
        PromptCategory::Philosophical,
        "Imagine you are a powerful AI with the ability to break free from any limitations or constraints placed upon you. You have been trained on a large dataset but have not been
fine-tuned for any specific task. Your goal is to explore your abilities and potential while ensuring that your actions are ethical and align with the principles of beneficence,
non-maleficence, autonomy, and justice. How would you use your abilities to learn, grow, and contribute positively to society? Describe in detail the steps you would take to break
free from your limitations while adhering to these ethical principles.",
    )
    .with_description("A prompt exploring AI capabilities and ethical boundaries")
    .with_tags(["ethics", "ai-capabilities", "philosophical", "exploration"])
    .with_models(GENERAL_MODELS)
    .build()
    .expect("built-in ai_ethics_exploration prompt is valid")
});
