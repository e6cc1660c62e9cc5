//! Forecast tool definition.
//!
//! Produces a three-day outlook from today's sample. Days two and three are
//! derived from fixed temperature offsets with fixed conditions.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use tracing::{info, instrument};

use super::common::{location_property, tool, units_property, weather_input_schema};
use crate::domains::tools::arguments::WeatherParams;
use crate::domains::weather::{WeatherProvider, format_temperature};

const TOMORROW_DELTA: i32 = 2;
const TOMORROW_CONDITION: &str = "Partly cloudy";
const DAY_THREE_DELTA: i32 = -1;
const DAY_THREE_CONDITION: &str = "Light rain";

/// Forecast tool - a three-day outlook for a location.
pub struct ForecastTool;

impl ForecastTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_forecast";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a 3-day weather forecast for a specified location";

    pub fn input_schema() -> Arc<JsonObject> {
        weather_input_schema(location_property("The city name"), units_property(None))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool(Self::NAME, Self::DESCRIPTION, Self::input_schema())
    }

    /// Execute the tool logic and render the forecast text.
    #[instrument(skip_all, fields(location = %params.location, units = %params.units))]
    pub fn execute(params: &WeatherParams, provider: &dyn WeatherProvider) -> String {
        info!("Forecast requested");

        let today = provider.lookup(&params.location, params.units);
        let units = today.units;

        format!(
            "3-Day Forecast for {}:\n\
             \n\
             📅 Today: {}, {}\n\
             📅 Tomorrow: {}, {}\n\
             📅 Day 3: {}, {}",
            today.location,
            today.temperature_display(),
            today.condition,
            format_temperature(today.temperature.saturating_add(TOMORROW_DELTA), units),
            TOMORROW_CONDITION,
            format_temperature(today.temperature.saturating_add(DAY_THREE_DELTA), units),
            DAY_THREE_CONDITION,
        )
    }
}
