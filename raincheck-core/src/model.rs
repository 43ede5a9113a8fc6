use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One geocoding candidate: a resolved position plus the service's own
/// name for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub coordinates: Coordinates,
    pub display_name: String,
}

/// Conditions "now" as decoded from the forecast service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
}

/// The most recently fetched conditions, tagged with the label they were
/// requested under. Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub label: String,
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherReading {
    pub fn now(label: impl Into<String>, conditions: CurrentConditions) -> Self {
        Self {
            label: label.into(),
            temperature_c: conditions.temperature_c,
            wind_speed_kmh: conditions.wind_speed_kmh,
            fetched_at: Utc::now(),
        }
    }
}
