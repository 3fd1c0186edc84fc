use std::fmt::Debug;

use async_trait::async_trait;

use crate::{error::ProviderError, model::WeatherReport};

pub mod openweather;

/// Abstraction over "fetch current weather for a location string".
///
/// One capability, one method; callers hold a `&dyn WeatherProvider`, so an
/// alternate backend can be substituted without touching them.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get(&self, location: &str) -> Result<WeatherReport, ProviderError>;
}
