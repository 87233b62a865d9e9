//! In-memory prompt registry

use std::collections::BTreeMap;

use super::{Prompt, PromptCategory};

/// Registry mapping prompt names to prompts
///
/// Names are unique: adding a prompt whose name is already registered replaces
/// the earlier one and hands it back. Queries iterate in name order, so results
/// are deterministic for a given set of prompts.
///
/// Mutation takes `&mut self`; wrap the manager in a `Mutex` or `RwLock` to
/// share it between tasks.
#[derive(Debug, Clone, Default)]
pub struct PromptManager {
    prompts: BTreeMap<String, Prompt>,
}

impl PromptManager {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `prompt` under its name
    ///
    /// Returns the prompt previously registered under that name, or `None` if
    /// the name was free. Callers that only register may ignore the result.
    pub fn add_prompt(&mut self, prompt: Prompt) -> Option<Prompt> {
        let replaced = self.prompts.insert(prompt.name().to_string(), prompt);
        if let Some(old) = &replaced {
            tracing::debug!(name = old.name(), "replaced registered prompt");
        }
        replaced
    }

    /// Look up a prompt by exact name
    pub fn get_prompt(&self, name: &str) -> Option<&Prompt> {
        self.prompts.get(name)
    }

    /// All prompts in `category`
    pub fn get_prompts_by_category(&self, category: PromptCategory) -> Vec<&Prompt> {
        self.prompts
            .values()
            .filter(|prompt| prompt.category() == category)
            .collect()
    }

    /// All prompts carrying exactly `tag`
    pub fn get_prompts_by_tag(&self, tag: &str) -> Vec<&Prompt> {
        self.prompts
            .values()
            .filter(|prompt| prompt.has_tag(tag))
            .collect()
    }

    /// All prompts listing `model` as compatible
    pub fn get_prompts_for_model(&self, model: &str) -> Vec<&Prompt> {
        self.prompts
            .values()
            .filter(|prompt| prompt.is_compatible_with(model))
            .collect()
    }

    /// Unregister a prompt
    pub fn remove_prompt(&mut self, name: &str) -> Option<Prompt> {
        self.prompts.remove(name)
    }

    /// Registered names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.prompts.keys().map(String::as_str)
    }

    /// Registered prompts in name order
    pub fn iter(&self) -> impl Iterator<Item = &Prompt> {
        self.prompts.values()
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl Extend<Prompt> for PromptManager {
    fn extend<T: IntoIterator<Item = Prompt>>(&mut self, iter: T) {
        for prompt in iter {
            self.add_prompt(prompt);
        }
    }
}

impl FromIterator<Prompt> for PromptManager {
    fn from_iter<T: IntoIterator<Item = Prompt>>(iter: T) -> Self {
        let mut manager = Self::new();
        manager.extend(iter);
        manager
    }
}
