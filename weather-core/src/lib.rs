//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration handling (API key from the environment)
//! - Abstraction over weather providers
//! - The weather report model, unit conversion, and rendering
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::ProviderError;
pub use model::{TemperatureUnit, WeatherReport};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
