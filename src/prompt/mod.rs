//! Prompt templates and their metadata

pub mod error;
pub mod manager;
pub mod template;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use error::PromptError;
pub use manager::PromptManager;

/// Default version string for new prompts
pub const DEFAULT_VERSION: &str = "1.0";

/// What a prompt is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptCategory {
    Coding,
    Writing,
    Analysis,
    Chat,
    System,
    General,
    Philosophical,
}

impl PromptCategory {
    pub const ALL: [PromptCategory; 7] = [
        PromptCategory::Coding,
        PromptCategory::Writing,
        PromptCategory::Analysis,
        PromptCategory::Chat,
        PromptCategory::System,
        PromptCategory::General,
        PromptCategory::Philosophical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptCategory::Coding => "coding",
            PromptCategory::Writing => "writing",
            PromptCategory::Analysis => "analysis",
            PromptCategory::Chat => "chat",
            PromptCategory::System => "system",
            PromptCategory::General => "general",
            PromptCategory::Philosophical => "philosophical",
        }
    }
}

impl fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown prompt category: {}", s))
    }
}

/// A named template with metadata describing where and how to use it
///
/// Prompts are immutable once built. The builder checks that every documented
/// parameter actually occurs in the template; undocumented placeholders are
/// allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PromptDefinition")]
pub struct Prompt {
    name: String,
    category: PromptCategory,
    template: String,
    description: String,
    tags: Vec<String>,
    model_compatibility: Vec<String>,
    parameters: BTreeMap<String, String>,
    version: String,
}

impl Prompt {
    /// Start building a prompt
    pub fn builder(
        name: impl Into<String>,
        category: PromptCategory,
        template: impl Into<String>,
    ) -> PromptBuilder {
        PromptBuilder {
            definition: PromptDefinition {
                name: name.into(),
                category,
                template: template.into(),
                description: String::new(),
                tags: Vec::new(),
                model_compatibility: Vec::new(),
                parameters: BTreeMap::new(),
                version: DEFAULT_VERSION.to_string(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> PromptCategory {
        self.category
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn model_compatibility(&self) -> &[String] {
        &self.model_compatibility
    }

    /// Placeholder name to human readable description
    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Exact tag match
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether `model` is listed as known to work with this template
    pub fn is_compatible_with(&self, model: &str) -> bool {
        self.model_compatibility.iter().any(|m| m == model)
    }

    /// Placeholders occurring in the template
    pub fn placeholders(&self) -> Vec<&str> {
        template::placeholders(&self.template)
    }

    /// Substitute each `{placeholder}` with the matching argument
    ///
    /// Arguments not referenced by the template are ignored. Arguments are not
    /// checked against [`parameters`](Self::parameters).
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::MissingParameter`] for the first placeholder
    /// without an argument.
    ///
    /// # Example
    ///
    /// ```
    /// use promptlib::prompt::{Prompt, PromptCategory};
    ///
    /// let prompt = Prompt::builder("greet", PromptCategory::Chat, "Hello {name}!")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(prompt.format([("name", "Ada")]).unwrap(), "Hello Ada!");
    /// ```
    pub fn format<I, K, V>(&self, args: I) -> Result<String, PromptError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        let args: HashMap<String, String> = args
            .into_iter()
            .map(|(k, v)| (k.into(), v.to_string()))
            .collect();

        template::render(&self.template, &args).map_err(|parameter| {
            PromptError::MissingParameter {
                prompt: self.name.clone(),
                parameter,
            }
        })
    }
}

/// Unvalidated prompt fields; the serialized form of a [`Prompt`]
#[derive(Debug, Clone, Deserialize)]
struct PromptDefinition {
    name: String,
    category: PromptCategory,
    template: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    model_compatibility: Vec<String>,
    #[serde(default)]
    parameters: BTreeMap<String, String>,
    #[serde(default = "default_version")]
    version: String,
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

impl TryFrom<PromptDefinition> for Prompt {
    type Error = PromptError;

    fn try_from(def: PromptDefinition) -> Result<Self, Self::Error> {
        let placeholders = template::placeholders(&def.template);
        if let Some(parameter) = def
            .parameters
            .keys()
            .find(|key| !placeholders.contains(&key.as_str()))
        {
            return Err(PromptError::UndeclaredParameter {
                prompt: def.name,
                parameter: parameter.clone(),
            });
        }

        Ok(Prompt {
            name: def.name,
            category: def.category,
            template: def.template,
            description: def.description,
            tags: def.tags,
            model_compatibility: def.model_compatibility,
            parameters: def.parameters,
            version: def.version,
        })
    }
}

/// Builder for [`Prompt`]
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    definition: PromptDefinition,
}

impl PromptBuilder {
    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.definition.description = description.into();
        self
    }

    /// Add tags; duplicates are dropped
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            if !self.definition.tags.contains(&tag) {
                self.definition.tags.push(tag);
            }
        }
        self
    }

    /// Add model identifiers the template is known to work with
    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.definition
            .model_compatibility
            .extend(models.into_iter().map(Into::into));
        self
    }

    /// Document a placeholder
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.definition
            .parameters
            .insert(name.into(), description.into());
        self
    }

    /// Set the version string
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.definition.version = version.into();
        self
    }

    /// Validate and build the prompt
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::UndeclaredParameter`] if a documented parameter
    /// does not occur in the template.
    pub fn build(self) -> Result<Prompt, PromptError> {
        Prompt::try_from(self.definition)
    }
}
