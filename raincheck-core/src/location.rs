//! Startup location detection.
//!
//! A terminal has no geolocation permission prompt, so the device position is
//! estimated from its public IP address. Detection runs at most once, at
//! startup; any failure means the caller falls back to the default city.

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::client::build_client;
use crate::model::Coordinates;

/// City used when location detection fails or is disabled.
pub const DEFAULT_CITY: &str = "Johannesburg";
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    latitude: -26.2041,
    longitude: 28.0473,
};

/// Label shown for a successfully detected position.
pub const DETECTED_LABEL: &str = "Your Location";

const IPAPI_CO_URL: &str = "https://ipapi.co/json/";
const IP_API_COM_URL: &str = "http://ip-api.com/json/";

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("failed to reach the geolocation service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("geolocation request failed with status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("failed to parse geolocation response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// IP-based position lookup, with a second service as fallback.
#[derive(Debug, Clone)]
pub struct IpLocator {
    http: Client,
    primary_url: String,
    fallback_url: String,
}

impl IpLocator {
    pub fn new() -> Result<Self, LocationError> {
        Self::with_urls(IPAPI_CO_URL, IP_API_COM_URL)
    }

    /// Point the locator at different endpoints. Used by tests.
    pub fn with_urls(
        primary_url: impl Into<String>,
        fallback_url: impl Into<String>,
    ) -> Result<Self, LocationError> {
        Ok(Self {
            http: build_client()?,
            primary_url: primary_url.into(),
            fallback_url: fallback_url.into(),
        })
    }

    /// Estimate the device's coordinates, trying the fallback service when
    /// the primary one is unreachable or answers garbage.
    pub async fn detect(&self) -> Result<Coordinates, LocationError> {
        match self.query::<IpapiCoResponse>(&self.primary_url).await {
            Ok(coordinates) => return Ok(coordinates),
            Err(err) => {
                tracing::debug!("primary geolocation lookup failed: {err}");
            }
        }

        self.query::<IpApiComResponse>(&self.fallback_url).await
    }

    async fn query<T>(&self, url: &str) -> Result<Coordinates, LocationError>
    where
        T: DeserializeOwned + Into<Coordinates>,
    {
        let res = self.http.get(url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(LocationError::Status { status });
        }

        let body = res.text().await?;
        let parsed: T = serde_json::from_str(&body)?;

        Ok(parsed.into())
    }
}

#[derive(Debug, Deserialize)]
struct IpapiCoResponse {
    latitude: f64,
    longitude: f64,
}

impl From<IpapiCoResponse> for Coordinates {
    fn from(res: IpapiCoResponse) -> Self {
        Coordinates {
            latitude: res.latitude,
            longitude: res.longitude,
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpApiComResponse {
    lat: f64,
    lon: f64,
}

impl From<IpApiComResponse> for Coordinates {
    fn from(res: IpApiComResponse) -> Self {
        Coordinates {
            latitude: res.lat,
            longitude: res.lon,
        }
    }
}
