//! Schema helpers shared by the weather tools.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};

use crate::domains::weather::UnitSystem;

/// Build a `{"type": "string"}` property schema for a location parameter.
pub fn location_property(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description,
    })
}

/// Build the `units` property schema, optionally with a description.
pub fn units_property(description: Option<&str>) -> Value {
    let mut property = json!({
        "type": "string",
        "enum": [UnitSystem::METRIC, UnitSystem::IMPERIAL],
        "default": UnitSystem::METRIC,
    });

    if let (Some(description), Some(obj)) = (description, property.as_object_mut()) {
        obj.insert("description".to_string(), Value::String(description.to_string()));
    }

    property
}

/// Assemble a JSON object schema with `location` required and `units` optional.
pub fn weather_input_schema(location: Value, units: Value) -> Arc<JsonObject> {
    let schema = json!({
        "type": "object",
        "properties": {
            "location": location,
            "units": units,
        },
        "required": ["location"],
    });

    match schema {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}

/// Create a Tool model from its parts.
pub fn tool(name: &'static str, description: &'static str, input_schema: Arc<JsonObject>) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema,
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_property_without_description() {
        let property = units_property(None);
        assert_eq!(property["enum"], json!(["metric", "imperial"]));
        assert_eq!(property["default"], "metric");
        assert!(property.get("description").is_none());
    }

    #[test]
    fn test_weather_input_schema_requires_location_only() {
        let schema = weather_input_schema(location_property("City"), units_property(None));
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["location"]));
        assert_eq!(schema["properties"]["location"]["type"], "string");
    }
}
