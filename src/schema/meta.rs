//! The function meta-schema and a structural check against it

use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

use super::error::SchemaError;

/// JSON Schema describing a function-calling schema
pub static FUNCTION_META_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "required": ["name", "description", "parameters"],
        "properties": {
            "name": {
                "type": "string",
                "description": "Name of the function"
            },
            "description": {
                "type": "string",
                "description": "Description of what the function does"
            },
            "parameters": {
                "type": "object",
                "required": ["type", "properties"],
                "properties": {
                    "type": {
                        "type": "string",
                        "enum": ["object"],
                        "description": "Type of the parameters object"
                    },
                    "required": {
                        "type": "array",
                        "items": {
                            "type": "string"
                        },
                        "description": "List of required parameter names"
                    },
                    "properties": {
                        "type": "object",
                        "description": "Object containing parameter definitions"
                    }
                }
            }
        }
    })
});

/// Check that `value` has the shape described by [`FUNCTION_META_SCHEMA`]
///
/// Property descriptors must carry a string `type`; `description` may be
/// omitted. Nested `items`, `properties` and `enum` are checked recursively.
pub fn check_function_shape(value: &Value) -> Result<(), SchemaError> {
    let root = as_object(value, "schema")?;
    string_field(root, "name", "schema")?;
    string_field(root, "description", "schema")?;

    let params = as_object(
        root.get("parameters")
            .ok_or_else(|| missing("schema", "parameters"))?,
        "parameters",
    )?;

    match params.get("type") {
        Some(Value::String(kind)) if kind == "object" => {}
        Some(other) => {
            return Err(SchemaError::InvalidShape(format!(
                "parameters.type must be \"object\", found {}",
                other
            )))
        }
        None => return Err(missing("parameters", "type")),
    }

    if let Some(required) = params.get("required") {
        string_array(required, "parameters.required")?;
    }

    let properties = params
        .get("properties")
        .ok_or_else(|| missing("parameters", "properties"))?;
    check_properties(properties, "parameters.properties")
}

fn check_properties(value: &Value, path: &str) -> Result<(), SchemaError> {
    for (name, prop) in as_object(value, path)? {
        check_property(prop, &format!("{}.{}", path, name))?;
    }
    Ok(())
}

fn check_property(value: &Value, path: &str) -> Result<(), SchemaError> {
    let prop = as_object(value, path)?;
    string_field(prop, "type", path)?;

    if let Some(description) = prop.get("description") {
        if !description.is_string() {
            return Err(SchemaError::InvalidShape(format!(
                "{}.description must be a string",
                path
            )));
        }
    }
    if let Some(values) = prop.get("enum") {
        string_array(values, &format!("{}.enum", path))?;
    }
    if let Some(items) = prop.get("items") {
        check_property(items, &format!("{}.items", path))?;
    }
    if let Some(nested) = prop.get("properties") {
        check_properties(nested, &format!("{}.properties", path))?;
    }
    Ok(())
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, SchemaError> {
    value
        .as_object()
        .ok_or_else(|| SchemaError::InvalidShape(format!("{} must be a JSON object", path)))
}

fn string_field<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a str, SchemaError> {
    match object.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(SchemaError::InvalidShape(format!(
            "{}.{} must be a string",
            path, key
        ))),
        None => Err(missing(path, key)),
    }
}

fn string_array(value: &Value, path: &str) -> Result<(), SchemaError> {
    match value.as_array() {
        Some(items) if items.iter().all(Value::is_string) => Ok(()),
        _ => Err(SchemaError::InvalidShape(format!(
            "{} must be an array of strings",
            path
        ))),
    }
}

fn missing(path: &str, key: &str) -> SchemaError {
    SchemaError::InvalidShape(format!("{} is missing required field '{}'", path, key))
}
