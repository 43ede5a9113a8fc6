//! Core library for the `raincheck` weather widget.
//!
//! This crate defines:
//! - Configuration handling (default location, theme)
//! - Clients for the forecast and geocoding services
//! - Startup location detection
//! - Shared domain models (coordinates, readings)
//!
//! It is used by `raincheck-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod location;
pub mod model;
pub mod provider;

pub use config::Config;
pub use location::{DEFAULT_CITY, DEFAULT_COORDINATES, DETECTED_LABEL, IpLocator, LocationError};
pub use model::{Coordinates, CurrentConditions, Place, WeatherReading};
pub use provider::{
    ForecastError, ForecastProvider, GeocodeError, Geocoder, NominatimGeocoder, OpenMeteoProvider,
};
