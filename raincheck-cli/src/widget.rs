//! The weather widget: owned state plus the event handlers that mutate it.
//!
//! All fields live in one explicit state struct owned by the widget instance;
//! network results are applied by the handler that awaited them, so there is
//! no shared mutable state and no fetch can overlap another.

use raincheck_core::Config;
use raincheck_core::location::DETECTED_LABEL;
use raincheck_core::model::{Coordinates, WeatherReading};
use raincheck_core::provider::{ForecastProvider, Geocoder};

/// Shown when the forecast call fails for any reason.
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching weather data";

/// Shown when geocoding fails or finds nothing.
pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found. Please try again.";

/// Everything the display is a function of, minus the reading itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub search_input: String,
    pub location_label: String,
    pub dark_mode: bool,
    pub error: Option<String>,
}

pub struct Widget {
    state: UiState,
    reading: Option<WeatherReading>,
    default_city: String,
    default_coordinates: Coordinates,
    forecast: Box<dyn ForecastProvider>,
    geocoder: Box<dyn Geocoder>,
}

impl Widget {
    pub fn new(
        forecast: Box<dyn ForecastProvider>,
        geocoder: Box<dyn Geocoder>,
        config: &Config,
        dark_mode: bool,
    ) -> Self {
        Self {
            state: UiState {
                search_input: String::new(),
                location_label: config.default_city.clone(),
                dark_mode,
                error: None,
            },
            reading: None,
            default_city: config.default_city.clone(),
            default_coordinates: config.default_coordinates(),
            forecast,
            geocoder,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn reading(&self) -> Option<&WeatherReading> {
        self.reading.as_ref()
    }

    pub fn set_search_input(&mut self, input: String) {
        self.state.search_input = input;
    }

    /// The one automatic fetch, run once at startup: the detected position
    /// when available, the default city otherwise.
    pub async fn mount(&mut self, detected: Option<Coordinates>) {
        match detected {
            Some(coordinates) => self.fetch_weather(coordinates, DETECTED_LABEL).await,
            None => {
                let label = self.default_city.clone();
                let coordinates = self.default_coordinates;
                self.fetch_weather(coordinates, &label).await;
            }
        }
    }

    /// Handle a search submission. An empty input is a no-op.
    ///
    /// On a geocoding hit the displayed location becomes the typed text and
    /// the input is cleared before the forecast fetch, so the clear sticks
    /// whatever that fetch does. A miss (transport failure or zero
    /// candidates) leaves location and reading untouched.
    pub async fn submit_search(&mut self) {
        if self.state.search_input.is_empty() {
            return;
        }
        let query = self.state.search_input.clone();

        match self.geocoder.search(&query).await {
            Ok(candidates) => match candidates.first() {
                Some(place) => {
                    let coordinates = place.coordinates;
                    self.state.location_label = query.clone();
                    self.state.search_input.clear();
                    self.fetch_weather(coordinates, &query).await;
                }
                None => {
                    self.state.error = Some(CITY_NOT_FOUND_MESSAGE.to_string());
                }
            },
            Err(err) => {
                tracing::warn!("geocoding {query:?} failed: {err}");
                self.state.error = Some(CITY_NOT_FOUND_MESSAGE.to_string());
            }
        }
    }

    /// Flips the color theme. Display-only.
    pub fn toggle_dark_mode(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;
    }

    /// Sole writer of the reading: replaces it wholesale on success and
    /// clears any prior error; on failure reports and leaves the previous
    /// reading (if any) in place.
    async fn fetch_weather(&mut self, coordinates: Coordinates, label: &str) {
        match self.forecast.current_conditions(coordinates).await {
            Ok(conditions) => {
                self.reading = Some(WeatherReading::now(label, conditions));
                self.state.error = None;
            }
            Err(err) => {
                tracing::warn!("forecast fetch for {label:?} failed: {err}");
                self.state.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
    }
}

impl std::fmt::Debug for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Widget")
            .field("state", &self.state)
            .field("reading", &self.reading)
            .finish_non_exhaustive()
    }
}
