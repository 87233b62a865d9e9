//! A single property descriptor

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entry of a schema's `properties` map
///
/// Only the fields that were set are serialized. A nested descriptor read
/// without a `description` is written back without one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaProperty {
    /// JSON type tag: "string", "number", "integer", "boolean", "object", "array"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allowed literal values
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Element descriptor for arrays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaProperty>>,
    /// Member descriptors for objects, in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaProperty>>,
}

impl SchemaProperty {
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: Some(description.into()),
            enum_values: None,
            items: None,
            properties: None,
        }
    }

    /// A descriptor with only a type
    pub fn untitled(kind: impl Into<String>) -> Self {
        Self {
            description: None,
            ..Self::new(kind, "")
        }
    }

    /// The description, or `""` when none was given
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn string(description: impl Into<String>) -> Self {
        Self::new("string", description)
    }

    pub fn number(description: impl Into<String>) -> Self {
        Self::new("number", description)
    }

    pub fn boolean(description: impl Into<String>) -> Self {
        Self::new("boolean", description)
    }

    /// An array whose elements are described by `items`
    pub fn array(description: impl Into<String>, items: SchemaProperty) -> Self {
        Self::new("array", description).with_items(items)
    }

    /// An object with the given members
    pub fn object<I, K>(description: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaProperty)>,
        K: Into<String>,
    {
        Self::new("object", description).with_properties(properties)
    }

    /// Restrict to the given literal values
    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_items(mut self, items: SchemaProperty) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    pub fn with_properties<I, K>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaProperty)>,
        K: Into<String>,
    {
        self.properties = Some(
            properties
                .into_iter()
                .map(|(name, prop)| (name.into(), prop))
                .collect(),
        );
        self
    }
}
