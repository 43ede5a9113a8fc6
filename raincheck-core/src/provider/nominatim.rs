//! Forward geocoding via Nominatim (OpenStreetMap). Free, no API key.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::client::build_client;
use crate::model::{Coordinates, Place};
use crate::provider::{GeocodeError, Geocoder, truncate_body};

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

/// How many candidates to ask for. Only the best match is consumed
/// downstream, but keeping a few makes the response inspectable in logs.
const RESULT_LIMIT: &str = "5";

#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    base_url: String,
    http: Client,
}

impl NominatimGeocoder {
    pub fn new() -> Result<Self, GeocodeError> {
        Self::with_base_url(NOMINATIM_URL)
    }

    /// Point the client at a different endpoint. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, GeocodeError> {
        Ok(Self {
            base_url: base_url.into(),
            http: build_client()?,
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[("city", query), ("format", "json"), ("limit", RESULT_LIMIT)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(GeocodeError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: Vec<NominatimPlace> = serde_json::from_str(&body)?;

        tracing::debug!(query, candidates = parsed.len(), "geocoding lookup");

        parsed
            .into_iter()
            .map(|place| {
                Ok(Place {
                    // Nominatim encodes coordinates as JSON strings
                    coordinates: Coordinates {
                        latitude: place.lat.parse()?,
                        longitude: place.lon.parse()?,
                    },
                    display_name: place.display_name,
                })
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}
