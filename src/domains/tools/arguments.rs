//! Argument resolution for tool calls.
//!
//! The catalog declares `location` as required and `units` as an enum, but
//! how strictly that contract is enforced is an explicit [`ArgumentPolicy`]
//! chosen when the dispatcher is built.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::error::ToolError;
use crate::domains::weather::UnitSystem;

/// Location used when a call does not name one.
pub const DEFAULT_LOCATION: &str = "Seoul";

/// How declared input contracts are enforced before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentPolicy {
    /// Always answer: missing or falsy values get defaults, and any unit
    /// value other than `"metric"` is treated as imperial.
    #[default]
    LenientDefaults,

    /// Reject calls that violate the declared schema.
    Strict,
}

impl ArgumentPolicy {
    /// Parse a policy name as used in configuration.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "lenient" | "lenient_defaults" | "lenient-defaults" => Some(Self::LenientDefaults),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Resolve the arguments shared by every weather tool.
    pub fn resolve(&self, args: &Map<String, Value>) -> Result<WeatherParams, ToolError> {
        match self {
            Self::LenientDefaults => Ok(WeatherParams {
                location: lenient_string(args.get("location"), DEFAULT_LOCATION),
                units: UnitSystem::from_arg(&lenient_string(
                    args.get("units"),
                    UnitSystem::METRIC,
                )),
            }),
            Self::Strict => {
                let location = match args.get("location") {
                    Some(Value::String(s)) => s.clone(),
                    Some(other) => {
                        return Err(ToolError::invalid_arguments(format!(
                            "'location' must be a string, got {}",
                            other
                        )));
                    }
                    None => {
                        return Err(ToolError::invalid_arguments(
                            "Missing required parameter 'location'",
                        ));
                    }
                };

                let units = match args.get("units") {
                    None => UnitSystem::default(),
                    Some(Value::String(s)) => UnitSystem::parse_strict(s).ok_or_else(|| {
                        ToolError::invalid_arguments(format!(
                            "'units' must be one of 'metric', 'imperial', got '{}'",
                            s
                        ))
                    })?,
                    Some(other) => {
                        return Err(ToolError::invalid_arguments(format!(
                            "'units' must be a string, got {}",
                            other
                        )));
                    }
                };

                Ok(WeatherParams { location, units })
            }
        }
    }
}

/// Resolved parameters for a weather tool call.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherParams {
    /// Location as supplied by the caller (not normalized).
    pub location: String,
    pub units: UnitSystem,
}

/// Render an argument as a string, substituting `default` for absent or
/// falsy values (`null`, `false`, `0`, `""`).
fn lenient_string(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => default.to_string(),
        Some(Value::String(s)) if s.is_empty() => default.to_string(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => default.to_string(),
        Some(other) => display_value(other),
    }
}

/// Render any JSON value as display text.
///
/// Arrays join their elements with `,` (nulls render empty), objects render
/// as `[object Object]`, and numbers use their shortest form.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn display_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }

    let f = n.as_f64().unwrap_or_default();
    let magnitude = f.abs();
    if magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return format!("{}", f);
    }

    // Exponent form carries an explicit sign on the exponent, e.g. `1e+21`.
    let text = format!("{:e}", f);
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => text,
    }
}
