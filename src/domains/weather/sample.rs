//! Weather value types: unit systems and samples.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit system a sample is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius and metres per second.
    #[default]
    Metric,
    /// Fahrenheit and miles per hour.
    Imperial,
}

impl UnitSystem {
    /// Wire value for metric units.
    pub const METRIC: &'static str = "metric";

    /// Wire value for imperial units.
    pub const IMPERIAL: &'static str = "imperial";

    /// Resolve a unit system from a caller-supplied value.
    ///
    /// Only the exact string `"metric"` selects metric units; every other
    /// value, recognized or not, selects imperial units.
    pub fn from_arg(value: &str) -> Self {
        if value == Self::METRIC {
            Self::Metric
        } else {
            Self::Imperial
        }
    }

    /// Parse a unit system, rejecting anything outside the declared enum.
    pub fn parse_strict(value: &str) -> Option<Self> {
        match value {
            Self::METRIC => Some(Self::Metric),
            Self::IMPERIAL => Some(Self::Imperial),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => Self::METRIC,
            Self::Imperial => Self::IMPERIAL,
        }
    }

    /// Suffix appended directly after a temperature value.
    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Suffix appended (after a space) to a wind speed value.
    pub fn speed_suffix(&self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single weather observation, created fresh for every lookup.
///
/// `temperature` and `wind_speed` are always expressed in `units`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSample {
    pub location: String,
    pub temperature: i32,
    pub condition: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub units: UnitSystem,
}

impl WeatherSample {
    /// Temperature with its unit suffix, e.g. `64°F`.
    pub fn temperature_display(&self) -> String {
        format_temperature(self.temperature, self.units)
    }

    /// Wind speed with its unit suffix, e.g. `9.4 mph`.
    pub fn wind_display(&self) -> String {
        format!("{} {}", self.wind_speed, self.units.speed_suffix())
    }
}

/// Format a temperature value in the given unit system.
pub fn format_temperature(value: i32, units: UnitSystem) -> String {
    format!("{}{}", value, units.temperature_suffix())
}
