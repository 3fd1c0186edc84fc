use clap::{CommandFactory, Parser};

use weather_core::{TemperatureUnit, WeatherProvider};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-cli",
    version,
    about = "Current weather for a location, in the unit of your choice"
)]
pub struct Cli {
    /// Temperature unit: c, f or freedom. Anything else falls back to kelvin.
    #[arg(long, default_value = "c")]
    pub unit: String,

    /// Location to look up; multiple words form one query ("New York").
    #[arg(value_name = "LOCATION")]
    pub location: Vec<String>,
}

impl Cli {
    /// Location words joined into a single query string, or `None` when no
    /// positional arguments were given.
    pub fn location_query(&self) -> Option<String> {
        if self.location.is_empty() {
            None
        } else {
            Some(self.location.join(" "))
        }
    }

    pub async fn run(self, provider: &dyn WeatherProvider) -> anyhow::Result<()> {
        let Some(location) = self.location_query() else {
            print_usage_and_exit();
        };

        let report = provider.get(&location).await?;

        let report = match TemperatureUnit::parse(&self.unit) {
            TemperatureUnit::Celsius => report.to_celsius(),
            TemperatureUnit::Fahrenheit => report.to_freedom_units(),
            TemperatureUnit::Unrecognized(unit) => {
                eprintln!("Warning! Unknown unit '{unit}'. Defaulting to kelvin.");
                report
            }
        };

        println!("{report}");

        Ok(())
    }
}

fn print_usage_and_exit() -> ! {
    let mut cmd = Cli::command();
    eprintln!("{}", cmd.render_usage());
    std::process::exit(1);
}
