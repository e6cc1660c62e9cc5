//! Weather fact providers.
//!
//! [`WeatherProvider`] is the seam between the tool dispatcher and wherever
//! weather data comes from. The only implementation today is
//! [`StaticWeatherProvider`], backed by a fixed in-memory table.

use tracing::debug;

use super::sample::{UnitSystem, WeatherSample};

/// Source of weather samples keyed by location and unit system.
///
/// Implementations must always answer; there is no error path.
pub trait WeatherProvider: Send + Sync {
    /// Look up the current weather for `location` in `units`.
    fn lookup(&self, location: &str, units: UnitSystem) -> WeatherSample;
}

/// Authored facts for one city. Metric and imperial figures are independent
/// constants, not conversions of each other.
#[derive(Debug, Clone, Copy)]
struct CityFacts {
    key: &'static str,
    display: &'static str,
    condition: &'static str,
    humidity: u8,
    temperature_c: i32,
    temperature_f: i32,
    wind_ms: f64,
    wind_mph: f64,
}

const CITIES: &[CityFacts] = &[
    CityFacts {
        key: "seoul",
        display: "Seoul, KR",
        condition: "Clear sky",
        humidity: 65,
        temperature_c: 15,
        temperature_f: 59,
        wind_ms: 3.5,
        wind_mph: 7.8,
    },
    CityFacts {
        key: "tokyo",
        display: "Tokyo, JP",
        condition: "Partly cloudy",
        humidity: 70,
        temperature_c: 18,
        temperature_f: 64,
        wind_ms: 4.2,
        wind_mph: 9.4,
    },
    CityFacts {
        key: "new york",
        display: "New York, US",
        condition: "Light rain",
        humidity: 80,
        temperature_c: 12,
        temperature_f: 54,
        wind_ms: 5.5,
        wind_mph: 12.3,
    },
    CityFacts {
        key: "london",
        display: "London, UK",
        condition: "Foggy",
        humidity: 85,
        temperature_c: 10,
        temperature_f: 50,
        wind_ms: 3.0,
        wind_mph: 6.7,
    },
    CityFacts {
        key: "paris",
        display: "Paris, FR",
        condition: "Overcast",
        humidity: 72,
        temperature_c: 14,
        temperature_f: 57,
        wind_ms: 4.0,
        wind_mph: 8.9,
    },
];

const FALLBACK_CONDITION: &str = "Unknown";
const FALLBACK_HUMIDITY: u8 = 60;
const FALLBACK_TEMPERATURE_C: i32 = 20;
const FALLBACK_TEMPERATURE_F: i32 = 68;
const FALLBACK_WIND_MS: f64 = 3.0;
const FALLBACK_WIND_MPH: f64 = 6.7;

impl CityFacts {
    fn sample(&self, units: UnitSystem) -> WeatherSample {
        let (temperature, wind_speed) = match units {
            UnitSystem::Metric => (self.temperature_c, self.wind_ms),
            UnitSystem::Imperial => (self.temperature_f, self.wind_mph),
        };

        WeatherSample {
            location: self.display.to_string(),
            temperature,
            condition: self.condition.to_string(),
            humidity: self.humidity,
            wind_speed,
            units,
        }
    }
}

/// Deterministic provider backed by a static table of major cities.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticWeatherProvider;

impl StaticWeatherProvider {
    pub fn new() -> Self {
        Self
    }

    /// Normalize a caller-supplied location into a table key.
    ///
    /// Only case is folded; whitespace and diacritics are left alone.
    pub fn location_key(location: &str) -> String {
        location.to_lowercase()
    }

    fn fallback(location: &str, units: UnitSystem) -> WeatherSample {
        let (temperature, wind_speed) = match units {
            UnitSystem::Metric => (FALLBACK_TEMPERATURE_C, FALLBACK_WIND_MS),
            UnitSystem::Imperial => (FALLBACK_TEMPERATURE_F, FALLBACK_WIND_MPH),
        };

        WeatherSample {
            location: location.to_string(),
            temperature,
            condition: FALLBACK_CONDITION.to_string(),
            humidity: FALLBACK_HUMIDITY,
            wind_speed,
            units,
        }
    }
}

impl WeatherProvider for StaticWeatherProvider {
    fn lookup(&self, location: &str, units: UnitSystem) -> WeatherSample {
        let key = Self::location_key(location);

        match CITIES.iter().find(|c| c.key == key) {
            Some(city) => city.sample(units),
            None => {
                debug!("No weather facts for '{}', using fallback sample", location);
                Self::fallback(location, units)
            }
        }
    }
}
