//! Weather domain module.
//!
//! Provides the weather value types and the provider abstraction the tools
//! query. Data is synthesized from a static table; no network access happens.

mod provider;
mod sample;

pub use provider::{StaticWeatherProvider, WeatherProvider};
pub use sample::{UnitSystem, WeatherSample, format_temperature};
