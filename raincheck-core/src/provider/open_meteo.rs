use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::client::build_client;
use crate::model::{Coordinates, CurrentConditions};
use crate::provider::{ForecastError, ForecastProvider, truncate_body};

const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Current-conditions client for Open-Meteo. Free, no API key.
///
/// Temperatures come back in °C and wind speeds in km/h, the service's
/// default units.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Result<Self, ForecastError> {
        Self::with_base_url(OPEN_METEO_URL)
    }

    /// Point the client at a different endpoint. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ForecastError> {
        Ok(Self {
            base_url: base_url.into(),
            http: build_client()?,
        })
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn current_conditions(
        &self,
        coordinates: Coordinates,
    ) -> Result<CurrentConditions, ForecastError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ForecastError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OmForecastResponse = serde_json::from_str(&body)?;

        Ok(CurrentConditions {
            temperature_c: parsed.current_weather.temperature,
            wind_speed_kmh: parsed.current_weather.windspeed,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: OmCurrentWeather,
}
