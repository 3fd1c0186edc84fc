use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Offset between Kelvin and Celsius.
pub const KELVIN_OFFSET: f64 = 273.15;

const KELVIN_SYMBOL: &str = "K";
const CELSIUS_SYMBOL: &str = "°C";
const FAHRENHEIT_SYMBOL: &str = "°F";

/// A physical place on planet earth.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Coords {
    #[serde(rename = "lon")]
    pub longitude: f64,
    #[serde(rename = "lat")]
    pub latitude: f64,
}

/// One weather condition descriptor, e.g. "Clear" / "clear sky".
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub id: u32,
    #[serde(rename = "main")]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// Thermal and atmospheric readings from the `main` block.
///
/// Temperatures arrive in Kelvin; the provider is never asked for a
/// different unit, conversion happens locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Measurements {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Atmospheric pressure, hPa.
    #[serde(default)]
    pub pressure: u32,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// Pressure at sea level, hPa. Not reported by every station.
    #[serde(default)]
    pub sea_level: Option<u32>,
    /// Pressure at ground level, hPa. Not reported by every station.
    #[serde(rename = "grnd_level", default)]
    pub ground_level: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Wind {
    /// Wind speed, metres per second.
    pub speed: f64,
    /// Wind direction, meteorological degrees.
    #[serde(rename = "deg")]
    pub degrees: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Clouds {
    /// Cloud coverage, percent.
    #[serde(rename = "all")]
    pub coverage: u8,
}

/// Country and sun-cycle data from the `sys` block.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub sunrise: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub sunset: Option<DateTime<Utc>>,
}

/// One parsed current-weather response.
///
/// Constructed from the provider's JSON body, optionally run through a unit
/// conversion, rendered via [`fmt::Display`], then discarded. The unit
/// symbol is display-only state and never part of the wire contract.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherReport {
    pub name: String,
    #[serde(rename = "coord", default)]
    pub coords: Coords,
    #[serde(rename = "weather")]
    pub conditions: Vec<Condition>,
    #[serde(rename = "main")]
    pub measurements: Measurements,
    #[serde(default)]
    pub wind: Wind,
    #[serde(default)]
    pub clouds: Clouds,
    /// Visibility, metres.
    #[serde(default)]
    pub visibility: u32,
    /// Observation timestamp.
    #[serde(rename = "dt", default, with = "chrono::serde::ts_seconds_option")]
    pub observed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sys: Sys,
    #[serde(skip)]
    unit_symbol: Option<&'static str>,
}

fn kelvin_to_fahrenheit(k: f64) -> f64 {
    k * 9.0 / 5.0 - 459.67
}

impl WeatherReport {
    /// Returns a copy of the report with all four temperature fields shifted
    /// from Kelvin to Celsius and the display symbol set to `°C`.
    ///
    /// The shift is a plain offset with no unit tracking: applied to an
    /// already-converted report it keeps subtracting.
    #[must_use]
    pub fn to_celsius(mut self) -> Self {
        self.measurements.temp -= KELVIN_OFFSET;
        self.measurements.temp_min -= KELVIN_OFFSET;
        self.measurements.temp_max -= KELVIN_OFFSET;
        self.measurements.feels_like -= KELVIN_OFFSET;

        self.unit_symbol = Some(CELSIUS_SYMBOL);

        self
    }

    /// Returns a copy of the report with all four temperature fields mapped
    /// through `K * 9/5 - 459.67` and the display symbol set to `°F`.
    ///
    /// Same caveat as [`WeatherReport::to_celsius`]: no unit tracking.
    #[must_use]
    pub fn to_freedom_units(mut self) -> Self {
        self.measurements.temp = kelvin_to_fahrenheit(self.measurements.temp);
        self.measurements.temp_min = kelvin_to_fahrenheit(self.measurements.temp_min);
        self.measurements.temp_max = kelvin_to_fahrenheit(self.measurements.temp_max);
        self.measurements.feels_like = kelvin_to_fahrenheit(self.measurements.feels_like);

        self.unit_symbol = Some(FAHRENHEIT_SYMBOL);

        self
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit_symbol.unwrap_or(KELVIN_SYMBOL);
        let condition = self.conditions.first().map_or("n/a", |c| c.category.as_str());

        writeln!(f, "== Weather In: {} ==", self.name)?;
        writeln!(f, "Weather: {condition}")?;
        writeln!(
            f,
            "Temperature: {:.2}{unit} (min: {:.2}{unit}, max: {:.2}{unit})",
            self.measurements.temp, self.measurements.temp_min, self.measurements.temp_max
        )?;
        writeln!(f, "Feels Like: {:.2}{unit}", self.measurements.feels_like)?;
        write!(f, "Humidity: {}%", self.measurements.humidity)
    }
}

/// Unit requested on the command line.
///
/// Parsing never fails: anything outside the recognized set is carried as
/// [`TemperatureUnit::Unrecognized`] so the caller can warn and fall back to
/// Kelvin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Unrecognized(String),
}

impl TemperatureUnit {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "c" => TemperatureUnit::Celsius,
            "f" | "freedom" => TemperatureUnit::Fahrenheit,
            _ => TemperatureUnit::Unrecognized(raw.to_owned()),
        }
    }
}
