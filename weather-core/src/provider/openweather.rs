use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{error::ProviderError, model::WeatherReport};

use super::WeatherProvider;

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Current-weather client for the OpenWeatherMap `/data/2.5/weather`
/// endpoint. Issues exactly one request per `get` call; no retries, and the
/// transport keeps its default timeout.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    /// Point the client at a different endpoint, e.g. a mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get(&self, location: &str) -> Result<WeatherReport, ProviderError> {
        debug!(%location, "requesting current weather");

        // No `units` parameter: the endpoint then reports temperatures in
        // Kelvin, and conversion stays on our side.
        let res = self
            .http
            .get(&self.base_url)
            .query(&[("q", location), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if status != StatusCode::OK {
            return Err(ProviderError::Api {
                status,
                body: truncate_body(&body),
            });
        }

        let report: WeatherReport = serde_json::from_str(&body)?;

        if report.conditions.is_empty() {
            return Err(ProviderError::NoConditionData);
        }

        debug!(%status, name = %report.name, "decoded weather report");

        Ok(report)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_owned();
    }
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}
