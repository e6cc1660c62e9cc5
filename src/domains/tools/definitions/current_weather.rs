//! Current weather tool definition.
//!
//! Reports temperature, condition, humidity and wind for a single location.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use tracing::{info, instrument};

use super::common::{location_property, tool, units_property, weather_input_schema};
use crate::domains::tools::arguments::WeatherParams;
use crate::domains::weather::WeatherProvider;

/// Current weather tool - a one-block report for a location.
pub struct CurrentWeatherTool;

impl CurrentWeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_current_weather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the current weather for a specified location. Supports major cities worldwide.";

    /// Input schema advertised to clients.
    pub fn input_schema() -> Arc<JsonObject> {
        weather_input_schema(
            location_property("The city name (e.g., 'Seoul', 'Tokyo', 'New York')"),
            units_property(Some(
                "Temperature units: 'metric' for Celsius, 'imperial' for Fahrenheit",
            )),
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool(Self::NAME, Self::DESCRIPTION, Self::input_schema())
    }

    /// Execute the tool logic and render the report text.
    #[instrument(skip_all, fields(location = %params.location, units = %params.units))]
    pub fn execute(params: &WeatherParams, provider: &dyn WeatherProvider) -> String {
        info!("Current weather requested");

        let weather = provider.lookup(&params.location, params.units);

        format!(
            "Current weather in {}:\n\
             🌡️  Temperature: {}\n\
             ☁️  Condition: {}\n\
             💧 Humidity: {}%\n\
             💨 Wind Speed: {}",
            weather.location,
            weather.temperature_display(),
            weather.condition,
            weather.humidity,
            weather.wind_display(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::weather::{StaticWeatherProvider, UnitSystem};

    fn params(location: &str, units: UnitSystem) -> WeatherParams {
        WeatherParams {
            location: location.to_string(),
            units,
        }
    }

    #[test]
    fn test_current_weather_metric_report() {
        let text = CurrentWeatherTool::execute(
            &params("Seoul", UnitSystem::Metric),
            &StaticWeatherProvider,
        );

        assert_eq!(
            text,
            "Current weather in Seoul, KR:\n\
             🌡️  Temperature: 15°C\n\
             ☁️  Condition: Clear sky\n\
             💧 Humidity: 65%\n\
             💨 Wind Speed: 3.5 m/s"
        );
    }

    #[test]
    fn test_current_weather_imperial_report() {
        let text = CurrentWeatherTool::execute(
            &params("Tokyo", UnitSystem::Imperial),
            &StaticWeatherProvider,
        );

        assert!(text.starts_with("Current weather in Tokyo, JP:"));
        assert!(text.contains("64°F"));
        assert!(text.contains("Partly cloudy"));
        assert!(text.contains("70%"));
        assert!(text.contains("9.4 mph"));
    }

    #[test]
    fn test_current_weather_fallback_report() {
        let text = CurrentWeatherTool::execute(
            &params("Atlantis", UnitSystem::Metric),
            &StaticWeatherProvider,
        );

        assert!(text.starts_with("Current weather in Atlantis:"));
        assert!(text.contains("20°C"));
        assert!(text.contains("Unknown"));
        assert!(text.ends_with("3 m/s"));
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = CurrentWeatherTool::to_tool();
        assert_eq!(tool.name, "get_current_weather");
        assert!(tool.input_schema["properties"]["units"].get("description").is_some());
    }
}
