use crate::models::{Coordinates, ForecastWindow};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Instantaneous fields requested from the upstream `current` block
const CURRENT_FIELDS: &[&str] = &[
    "temperature_2m",
    "relative_humidity_2m",
    "apparent_temperature",
    "precipitation",
    "rain",
    "wind_speed_10m",
    "wind_direction_10m",
    "weather_code",
];

/// Daily aggregate fields requested from the upstream `daily` block
const DAILY_FIELDS: &[&str] = &[
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_sum",
    "rain_sum",
    "precipitation_probability_max",
    "wind_speed_10m_max",
    "weather_code",
];

/// Errors that can occur when talking to Open-Meteo
#[derive(Debug, Error)]
pub enum OpenMeteoError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// One upstream data block and its unit map, passed through untouched
#[derive(Debug, Clone)]
pub struct WeatherBlock {
    pub data: Value,
    pub units: Value,
}

/// Open-Meteo forecast API client
///
/// Issues single-shot GET requests against the forecast endpoint. The base
/// URL is configurable so tests can point it at a local mock server.
pub struct OpenMeteoClient {
    base_url: String,
    client: Client,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with an explicit request timeout
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Fetch current conditions at the given coordinates
    ///
    /// Returns the upstream `current` block and `current_units` map.
    pub async fn fetch_current(
        &self,
        coordinates: Coordinates,
    ) -> Result<WeatherBlock, OpenMeteoError> {
        let response = self
            .client
            .get(self.base_url.trim_end_matches('/'))
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("current", CURRENT_FIELDS.join(",")),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let json = self.read_body(response).await?;
        extract_block(&json, "current", "current_units")
    }

    /// Fetch daily aggregates for the given coordinates and window
    ///
    /// Returns the upstream `daily` block and `daily_units` map.
    pub async fn fetch_forecast(
        &self,
        coordinates: Coordinates,
        window: ForecastWindow,
    ) -> Result<WeatherBlock, OpenMeteoError> {
        let response = self
            .client
            .get(self.base_url.trim_end_matches('/'))
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("daily", DAILY_FIELDS.join(",")),
                ("timezone", "auto".to_string()),
                ("forecast_days", window.days.to_string()),
            ])
            .send()
            .await?;

        let json = self.read_body(response).await?;
        extract_block(&json, "daily", "daily_units")
    }

    /// Check the upstream status and decode the payload
    async fn read_body(&self, response: reqwest::Response) -> Result<Value, OpenMeteoError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::debug!("Open-Meteo returned {}: {}", status, body);
            return Err(OpenMeteoError::ApiError(format!(
                "Open-Meteo returned {}",
                status
            )));
        }

        Ok(response.json().await?)
    }
}

/// Pull a data block and its unit map out of the upstream payload
fn extract_block(json: &Value, data_key: &str, units_key: &str) -> Result<WeatherBlock, OpenMeteoError> {
    let data = json
        .get(data_key)
        .cloned()
        .ok_or_else(|| OpenMeteoError::InvalidResponse(format!("Missing {} block", data_key)))?;

    let units = json
        .get(units_key)
        .cloned()
        .ok_or_else(|| OpenMeteoError::InvalidResponse(format!("Missing {} block", units_key)))?;

    Ok(WeatherBlock { data, units })
}
