//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

mod common;
pub mod current_weather;
pub mod forecast;

pub use current_weather::CurrentWeatherTool;
pub use forecast::ForecastTool;
