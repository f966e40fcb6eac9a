use crate::config::WeatherConfig;
use crate::domain::models::WeatherReport;
use crate::domain::weather::{WeatherError, WeatherProvider};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ApiResponse {
    cod: Value,
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    main: Option<ApiMain>,
    #[serde(default)]
    weather: Vec<ApiCondition>,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    #[serde(default)]
    icon: String,
    #[serde(default)]
    description: String,
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Maps an OpenWeatherMap current-weather body to a report. Errors are
/// reported in-band through `cod`, which is a number on success and usually
/// a string on failure.
pub fn parse_response(body: &str) -> Result<WeatherReport, WeatherError> {
    let response: ApiResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Decode(e.to_string()))?;

    let code = value_text(&response.cod);
    if code != "200" {
        return Err(WeatherError::Service {
            code,
            message: response
                .message
                .as_ref()
                .map(value_text)
                .unwrap_or_default(),
        });
    }

    let name = response
        .name
        .ok_or_else(|| WeatherError::Decode("missing name".to_string()))?;
    let main = response
        .main
        .ok_or_else(|| WeatherError::Decode("missing main".to_string()))?;
    let condition = response.weather.into_iter().next();

    Ok(WeatherReport {
        city: name,
        temperature: main.temp,
        icon: condition
            .as_ref()
            .map(|c| c.icon.clone())
            .unwrap_or_default(),
        description: condition.map(|c| c.description).unwrap_or_default(),
    })
}

pub struct OpenWeatherClient {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(WeatherError::MissingApiKey)?;

        let url = format!(
            "{}/data/2.5/weather",
            self.config.base_url.trim_end_matches('/')
        );
        tracing::debug!(%city, "fetching weather");

        let body = self
            .http
            .get(url)
            .query(&[
                ("q", city),
                ("appid", api_key),
                ("units", self.config.units.as_str()),
                ("lang", self.config.lang.as_str()),
            ])
            .send()
            .await?
            .text()
            .await?;

        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success() {
        let body = r#"{
            "coord": {"lon": 2.35, "lat": 48.85},
            "weather": [{"id": 500, "main": "Rain", "description": "légère pluie", "icon": "10d"}],
            "main": {"temp": 14.46, "humidity": 81},
            "name": "Paris",
            "cod": 200
        }"#;
        let report = parse_response(body).unwrap();
        assert_eq!(report.city, "Paris");
        assert_eq!(report.icon, "10d");
        assert_eq!(report.temperature_label(), "14°C");
        assert_eq!(report.description, "légère pluie");
    }

    #[test]
    fn test_parse_city_not_found() {
        let body = r#"{"cod":"404","message":"city not found"}"#;
        match parse_response(body) {
            Err(WeatherError::Service { code, message }) => {
                assert_eq!(code, "404");
                assert_eq!(message, "city not found");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_unauthorized_numeric_code() {
        let body = r#"{"cod":401, "message": "Invalid API key."}"#;
        assert!(matches!(
            parse_response(body),
            Err(WeatherError::Service { ref code, .. }) if code == "401"
        ));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_response("<html>bad gateway</html>"),
            Err(WeatherError::Decode(_))
        ));
        assert!(matches!(
            parse_response(r#"{"cod":200}"#),
            Err(WeatherError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_api_key_short_circuits() {
        let client = OpenWeatherClient::new(WeatherConfig::default()).unwrap();
        let err = client.current("Paris").await.unwrap_err();
        assert!(matches!(err, WeatherError::MissingApiKey));
    }
}
