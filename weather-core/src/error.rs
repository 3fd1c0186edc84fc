use reqwest::StatusCode;
use thiserror::Error;

/// Failures a weather provider can surface while fetching a report.
///
/// Every variant is fatal to the invocation: the CLI prints the message and
/// exits, there is no retry or fallback path.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request could not be sent or the connection failed.
    #[error("failed to reach weather provider: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-200 status.
    #[error("weather provider returned status {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// The response body was not valid JSON for the expected schema.
    #[error("failed to decode weather provider response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response decoded but carried an empty weather-conditions list.
    #[error("weather provider response contained no condition data")]
    NoConditionData,
}
