use crate::domain::models::WeatherReport;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeatherStatus {
    #[default]
    Loading,
    Ready(WeatherReport),
    /// Every failure lands here; the cause only goes to the log.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherState {
    pub city: String,
    pub status: WeatherStatus,
}

impl WeatherState {
    #[must_use]
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            status: WeatherStatus::Loading,
        }
    }
}
