use super::models::WeatherReport;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("no weather API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("weather service answered {code}: {message}")]
    Service { code: String, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Display text for every failure. Network errors, API errors and unknown
/// cities are deliberately indistinguishable on screen.
pub const WEATHER_NOT_FOUND: &str = "City not found";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}
