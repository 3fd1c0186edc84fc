use std::env;

use anyhow::{Result, anyhow};

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_ENV: &str = "OPENWEATHERMAP_API_KEY";

/// Runtime configuration, resolved once at startup and passed by parameter
/// from the entry point. Nothing is persisted between runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A missing or blank API key is fatal at startup, before any request is
    /// attempted.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env::var(API_KEY_ENV).ok())
    }

    fn from_lookup(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key.filter(|key| !key.trim().is_empty()).ok_or_else(|| {
            anyhow!(
                "Environment variable {API_KEY_ENV} is not set.\n\
                 Hint: set it to your OpenWeatherMap API key before running."
            )
        })?;

        Ok(Self { api_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_when_api_key_is_absent() {
        let err = Config::from_lookup(None).unwrap_err();

        assert!(err.to_string().contains(API_KEY_ENV));
        assert!(err.to_string().contains("Hint:"));
    }

    #[test]
    fn errors_when_api_key_is_blank() {
        let err = Config::from_lookup(Some("   ".to_string())).unwrap_err();

        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn accepts_a_present_api_key() {
        let cfg = Config::from_lookup(Some("SOME_KEY".to_string())).expect("key must be accepted");

        assert_eq!(cfg.api_key, "SOME_KEY");
    }
}
