use crate::model::{Coordinates, CurrentConditions, Place};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod nominatim;
pub mod open_meteo;

pub use nominatim::NominatimGeocoder;
pub use open_meteo::OpenMeteoProvider;

/// Errors from the current-conditions service.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("failed to reach the forecast service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("forecast request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse forecast response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors from the place-search service.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("failed to reach the geocoding service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("geocoding request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse geocoding response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("geocoding response contained an invalid coordinate: {0}")]
    Coordinate(#[from] std::num::ParseFloatError),
}

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Fetch the conditions "now" at the given coordinates.
    async fn current_conditions(
        &self,
        coordinates: Coordinates,
    ) -> Result<CurrentConditions, ForecastError>;
}

#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// Resolve a free-text place name to candidate locations, best match first.
    ///
    /// An empty list is a well-formed answer ("no such place"), not an error.
    async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError>;
}

/// Keep upstream error bodies readable in messages.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
