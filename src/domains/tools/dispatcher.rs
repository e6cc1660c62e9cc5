//! Request dispatcher - resolves tool calls against the catalog.
//!
//! The dispatcher is stateless across calls: it holds an immutable catalog,
//! a shared weather provider and the argument policy, so a single instance
//! can be shared between connections without locking.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use super::arguments::ArgumentPolicy;
use super::catalog::ToolCatalog;
use super::definitions::{CurrentWeatherTool, ForecastTool};
use super::error::ToolError;
use crate::domains::weather::{StaticWeatherProvider, WeatherProvider};

/// Routes tool calls to their handlers and formats the text result.
pub struct RequestDispatcher {
    catalog: ToolCatalog,
    provider: Arc<dyn WeatherProvider>,
    policy: ArgumentPolicy,
}

impl RequestDispatcher {
    /// Create a dispatcher over the given provider and argument policy.
    pub fn new(provider: Arc<dyn WeatherProvider>, policy: ArgumentPolicy) -> Self {
        Self {
            catalog: ToolCatalog::new(),
            provider,
            policy,
        }
    }

    /// Create a dispatcher backed by the static fact table.
    pub fn with_static_provider(policy: ArgumentPolicy) -> Self {
        Self::new(Arc::new(StaticWeatherProvider::new()), policy)
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> ArgumentPolicy {
        self.policy
    }

    /// List all tools, in declaration order.
    pub fn list_tools(&self) -> &[rmcp::model::Tool] {
        self.catalog.list()
    }

    /// Call a tool by name and return its single text block.
    #[instrument(skip(self, arguments))]
    pub fn call_tool(&self, name: &str, arguments: &Map<String, Value>) -> Result<String, ToolError> {
        if !self.catalog.contains(name) {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::unknown_tool(name));
        }

        let params = self.policy.resolve(arguments)?;
        debug!(
            "Resolved arguments: location='{}', units={}",
            params.location, params.units
        );

        match name {
            CurrentWeatherTool::NAME => Ok(CurrentWeatherTool::execute(&params, self.provider.as_ref())),
            ForecastTool::NAME => Ok(ForecastTool::execute(&params, self.provider.as_ref())),
            _ => {
                warn!("Tool '{}' is declared but has no handler", name);
                Err(ToolError::unknown_tool(name))
            }
        }
    }
}

impl Default for RequestDispatcher {
    fn default() -> Self {
        Self::with_static_provider(ArgumentPolicy::default())
    }
}

impl std::fmt::Debug for RequestDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestDispatcher")
            .field("tools", &self.catalog.tool_names())
            .field("policy", &self.policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::weather::{UnitSystem, WeatherSample};
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    /// Provider returning the same sample for every location.
    struct FixedProvider;

    impl WeatherProvider for FixedProvider {
        fn lookup(&self, location: &str, units: UnitSystem) -> WeatherSample {
            WeatherSample {
                location: format!("{location} (fixed)"),
                temperature: -5,
                condition: "Snow".to_string(),
                humidity: 90,
                wind_speed: 1.5,
                units,
            }
        }
    }

    #[test]
    fn test_dispatch_current_weather() {
        let dispatcher = RequestDispatcher::default();
        let text = dispatcher
            .call_tool(
                "get_current_weather",
                &args(json!({ "location": "Tokyo", "units": "imperial" })),
            )
            .unwrap();

        assert!(text.contains("Tokyo, JP"));
        assert!(text.contains("64°F"));
        assert!(text.contains("Partly cloudy"));
        assert!(text.contains("70%"));
        assert!(text.contains("9.4 mph"));
    }

    #[test]
    fn test_dispatch_defaults_to_seoul_metric() {
        let dispatcher = RequestDispatcher::default();
        let text = dispatcher.call_tool("get_current_weather", &Map::new()).unwrap();
        assert!(text.starts_with("Current weather in Seoul, KR:"));
        assert!(text.contains("15°C"));
        assert!(text.contains("3.5 m/s"));
    }

    #[test]
    fn test_dispatch_non_metric_units_render_imperial() {
        let dispatcher = RequestDispatcher::default();
        let text = dispatcher
            .call_tool("get_forecast", &args(json!({ "location": "Paris", "units": "kelvin" })))
            .unwrap();
        assert!(text.contains("Today: 57°F, Overcast"));
        assert!(!text.contains("°C"));
    }

    #[test]
    fn test_dispatch_unknown_tool() {
        let dispatcher = RequestDispatcher::default();
        let result = dispatcher.call_tool("get_sunrise", &Map::new());
        assert_eq!(result, Err(ToolError::UnknownTool("get_sunrise".to_string())));
    }

    #[test]
    fn test_dispatch_strict_policy_rejects_missing_location() {
        let dispatcher = RequestDispatcher::with_static_provider(ArgumentPolicy::Strict);
        let result = dispatcher.call_tool("get_forecast", &Map::new());
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_dispatch_unknown_tool_wins_over_bad_arguments() {
        let dispatcher = RequestDispatcher::with_static_provider(ArgumentPolicy::Strict);
        let result = dispatcher.call_tool("get_sunrise", &Map::new());
        assert!(matches!(result, Err(ToolError::UnknownTool(_))));
    }

    #[test]
    fn test_dispatch_uses_injected_provider() {
        let dispatcher = RequestDispatcher::new(Arc::new(FixedProvider), ArgumentPolicy::default());
        let text = dispatcher
            .call_tool("get_forecast", &args(json!({ "location": "Oslo" })))
            .unwrap();

        assert!(text.starts_with("3-Day Forecast for Oslo (fixed):"));
        assert!(text.contains("Today: -5°C, Snow"));
        assert!(text.contains("Tomorrow: -3°C, Partly cloudy"));
        assert!(text.contains("Day 3: -6°C, Light rain"));
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let dispatcher = RequestDispatcher::default();
        let arguments = args(json!({ "location": "London" }));
        let first = dispatcher.call_tool("get_current_weather", &arguments).unwrap();
        let second = dispatcher.call_tool("get_current_weather", &arguments).unwrap();
        assert_eq!(first, second);
    }
}
