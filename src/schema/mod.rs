//! Function-calling schemas
//!
//! A [`Schema`] describes a callable's interface as
//! `{name, description, parameters: {type: "object", required, properties}}`,
//! the shape OpenAI-style function calling expects. Properties keep the order
//! they were declared in, which is also the default order of `required`.

pub mod error;
pub mod meta;
pub mod property;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::llm::ToolDeclaration;

pub use error::SchemaError;
pub use meta::{check_function_shape, FUNCTION_META_SCHEMA};
pub use property::SchemaProperty;

/// Nesting depth at which `$ref` resolution gives up
const MAX_REF_DEPTH: usize = 16;

/// A function description with typed parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Value", try_from = "Value")]
pub struct Schema {
    pub name: String,
    pub description: String,
    pub properties: IndexMap<String, SchemaProperty>,
    /// Property names that must be supplied
    pub required: Vec<String>,
}

/// Wire form read by [`Schema::from_value`]
#[derive(Debug, Deserialize)]
struct FunctionDefinition {
    name: String,
    description: String,
    parameters: ParametersObject,
}

#[derive(Debug, Deserialize)]
struct ParametersObject {
    #[serde(default)]
    required: Option<Vec<String>>,
    properties: IndexMap<String, SchemaProperty>,
}

impl From<Schema> for Value {
    fn from(schema: Schema) -> Self {
        schema.to_value()
    }
}

impl TryFrom<Value> for Schema {
    type Error = SchemaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Schema::from_value(&value)
    }
}

impl Schema {
    /// Create a schema where every property is required, in the given order
    pub fn new<I, K>(name: impl Into<String>, description: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaProperty)>,
        K: Into<String>,
    {
        let properties: IndexMap<String, SchemaProperty> = properties
            .into_iter()
            .map(|(name, prop)| (name.into(), prop))
            .collect();
        let required = properties.keys().cloned().collect();

        Self {
            name: name.into(),
            description: description.into(),
            properties,
            required,
        }
    }

    /// Replace the required list
    pub fn with_required<I, S>(mut self, required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = required.into_iter().map(Into::into).collect();
        self
    }

    /// Check that every `required` entry names a property
    pub fn validate(&self) -> Result<(), SchemaError> {
        match self
            .required
            .iter()
            .find(|name| !self.properties.contains_key(name.as_str()))
        {
            Some(name) => Err(SchemaError::UnknownRequired(name.clone())),
            None => Ok(()),
        }
    }

    /// Nested JSON form
    ///
    /// Top-level properties always carry a `description` (empty when unset);
    /// nested descriptors only when they have one.
    pub fn to_value(&self) -> Value {
        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|(name, prop)| {
                let mut entry = property_value(prop);
                entry
                    .entry("description")
                    .or_insert_with(|| Value::String(String::new()));
                (name.clone(), Value::Object(entry))
            })
            .collect();

        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "parameters": {
                "type": "object",
                "required": self.required,
                "properties": properties,
            }
        })
    }

    /// Compact JSON text
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    /// JSON text indented by two spaces
    pub fn to_json_pretty(&self) -> String {
        // Value's Display/pretty printers cannot fail
        serde_json::to_string_pretty(&self.to_value()).unwrap_or_default()
    }

    /// Parse the nested JSON form
    ///
    /// The value is checked against [`FUNCTION_META_SCHEMA`] first, so
    /// malformed input yields [`SchemaError::InvalidShape`]. When `required`
    /// is absent every property is required, in declaration order. A
    /// top-level property without a description gets an empty one.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        check_function_shape(value)?;

        let definition: FunctionDefinition = serde_json::from_value(value.clone())
            .map_err(|e| SchemaError::InvalidShape(e.to_string()))?;
        let ParametersObject {
            required,
            mut properties,
        } = definition.parameters;

        for prop in properties.values_mut() {
            prop.description.get_or_insert_with(String::new);
        }
        let required = required.unwrap_or_else(|| properties.keys().cloned().collect());

        Ok(Self {
            name: definition.name,
            description: definition.description,
            properties,
            required,
        })
    }

    /// Parse JSON text
    pub fn from_json(text: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Derive a schema from a Rust type's [`JsonSchema`] implementation
    ///
    /// Fields keep their declaration order. Doc comments on fields become
    /// property descriptions; non-`Option` fields are required.
    ///
    /// # Example
    ///
    /// ```
    /// use promptlib::schema::Schema;
    /// use schemars::JsonSchema;
    ///
    /// #[derive(JsonSchema)]
    /// #[allow(dead_code)]
    /// struct WeatherArgs {
    ///     /// City name
    ///     location: String,
    /// }
    ///
    /// let schema = Schema::for_type::<WeatherArgs>("get_weather", "Get current weather").unwrap();
    /// assert_eq!(schema.required, vec!["location"]);
    /// ```
    pub fn for_type<T: JsonSchema>(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, SchemaError> {
        let root = serde_json::to_value(schemars::schema_for!(T))?;
        let definitions = root
            .get("definitions")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let properties = match root.get("properties").and_then(Value::as_object) {
            Some(properties) => properties,
            None => {
                return Err(SchemaError::Unsupported(
                    "function arguments must be a struct with named fields".to_string(),
                ))
            }
        };

        let mut converted = IndexMap::new();
        for (field, value) in properties {
            let mut prop = convert_property(value, &definitions, 0)?;
            prop.description.get_or_insert_with(String::new);
            converted.insert(field.clone(), prop);
        }

        // schemars keeps `required` sorted; report it in field order instead
        let required_names: Vec<&str> = root
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        let required = converted
            .keys()
            .filter(|field| required_names.contains(&field.as_str()))
            .cloned()
            .collect();

        Ok(Self {
            name: name.into(),
            description: description.into(),
            properties: converted,
            required,
        })
    }

    /// Tool declaration whose input schema is this schema's `parameters` object
    pub fn to_tool_declaration(&self) -> ToolDeclaration {
        let mut value = self.to_value();
        ToolDeclaration {
            name: self.name.clone(),
            description: self.description.clone(),
            input_schema: value["parameters"].take(),
        }
    }
}

fn property_value(prop: &SchemaProperty) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("type".to_string(), Value::String(prop.kind.clone()));
    if let Some(description) = &prop.description {
        object.insert(
            "description".to_string(),
            Value::String(description.clone()),
        );
    }
    if let Some(values) = &prop.enum_values {
        object.insert(
            "enum".to_string(),
            Value::Array(values.iter().cloned().map(Value::String).collect()),
        );
    }
    if let Some(items) = &prop.items {
        object.insert("items".to_string(), Value::Object(property_value(items)));
    }
    if let Some(nested) = &prop.properties {
        let nested = nested
            .iter()
            .map(|(name, prop)| (name.clone(), Value::Object(property_value(prop))))
            .collect();
        object.insert("properties".to_string(), Value::Object(nested));
    }
    object
}

/// Convert one schemars property into a [`SchemaProperty`]
fn convert_property(
    value: &Value,
    definitions: &Map<String, Value>,
    depth: usize,
) -> Result<SchemaProperty, SchemaError> {
    if depth > MAX_REF_DEPTH {
        return Err(SchemaError::Unsupported(
            "recursive types cannot be expressed as a function schema".to_string(),
        ));
    }

    let description = value.get("description").and_then(Value::as_str);

    // Follow references and single-variant wrappers, keeping the outer description
    let inner = if let Some(reference) = value.get("$ref").and_then(Value::as_str) {
        Some(resolve_ref(reference, definitions)?)
    } else if let Some(variants) = value
        .get("allOf")
        .or_else(|| value.get("anyOf"))
        .or_else(|| value.get("oneOf"))
        .and_then(Value::as_array)
    {
        let variant = variants
            .iter()
            .find(|variant| variant.get("type").and_then(Value::as_str) != Some("null"))
            .ok_or_else(|| {
                SchemaError::Unsupported("composite schema with no variants".to_string())
            })?;
        Some(variant)
    } else {
        None
    };

    if let Some(inner) = inner {
        let mut prop = convert_property(inner, definitions, depth + 1)?;
        if let Some(description) = description {
            prop.description = Some(description.to_string());
        }
        return Ok(prop);
    }

    let kind = match value.get("type") {
        Some(Value::String(kind)) => kind.clone(),
        Some(Value::Array(kinds)) => kinds
            .iter()
            .filter_map(Value::as_str)
            .find(|kind| *kind != "null")
            .map(String::from)
            .ok_or_else(|| SchemaError::Unsupported(format!("type list {:?}", kinds)))?,
        _ if value.get("enum").is_some() => "string".to_string(),
        _ => {
            return Err(SchemaError::Unsupported(format!(
                "property without a type: {}",
                value
            )))
        }
    };

    let mut prop = SchemaProperty::untitled(kind);
    prop.description = description.map(String::from);

    if let Some(values) = value.get("enum").and_then(Value::as_array) {
        let values: Vec<String> = values
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect();
        if !values.is_empty() {
            prop.enum_values = Some(values);
        }
    }
    if let Some(items) = value.get("items").filter(|items| items.is_object()) {
        prop.items = Some(Box::new(convert_property(items, definitions, depth + 1)?));
    }
    if let Some(nested) = value.get("properties").and_then(Value::as_object) {
        let mut members = IndexMap::new();
        for (name, member) in nested {
            members.insert(name.clone(), convert_property(member, definitions, depth + 1)?);
        }
        prop.properties = Some(members);
    }

    Ok(prop)
}

fn resolve_ref<'a>(
    reference: &str,
    definitions: &'a Map<String, Value>,
) -> Result<&'a Value, SchemaError> {
    reference
        .strip_prefix("#/definitions/")
        .or_else(|| reference.strip_prefix("#/$defs/"))
        .and_then(|name| definitions.get(name))
        .ok_or_else(|| SchemaError::Unsupported(format!("unresolvable reference {}", reference)))
}
