//! Styled terminal output: a pure function of the widget state.

use chrono::Local;
use crossterm::style::{Color, Stylize};
use raincheck_core::model::WeatherReading;

use crate::widget::UiState;

/// Color set the toggle flips between. Presentation only: no effect on
/// data fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn of(state: &UiState) -> Self {
        if state.dark_mode { Theme::Dark } else { Theme::Light }
    }

    fn heading(self) -> Color {
        match self {
            Theme::Light => Color::DarkBlue,
            Theme::Dark => Color::Cyan,
        }
    }

    fn text(self) -> Color {
        match self {
            Theme::Light => Color::Black,
            Theme::Dark => Color::White,
        }
    }

    fn dim(self) -> Color {
        match self {
            Theme::Light => Color::DarkGrey,
            Theme::Dark => Color::Grey,
        }
    }

    fn error(self) -> Color {
        match self {
            Theme::Light => Color::DarkRed,
            Theme::Dark => Color::Red,
        }
    }
}

/// The page frame around the widget.
pub fn header(state: &UiState) -> String {
    let theme = Theme::of(state);
    format!("{}", "Rain Check".with(theme.heading()).bold())
}

/// Render the widget: a loading line until the first result arrives, then
/// the error message and/or the current reading.
pub fn render(state: &UiState, reading: Option<&WeatherReading>) -> String {
    let theme = Theme::of(state);
    let mut out = String::new();

    if state.error.is_none() && reading.is_none() {
        out.push_str(&format!("{}\n", "Loading...".with(theme.dim())));
        return out;
    }

    if let Some(error) = state.error.as_deref() {
        out.push_str(&format!("{}\n", error.with(theme.error())));
    }

    if let Some(reading) = reading {
        out.push_str(&format!(
            "{}\n",
            reading.label.as_str().with(theme.heading()).bold()
        ));
        out.push_str(&format!(
            "  {}\n",
            format!("Wind: {} km/h", reading.wind_speed_kmh).with(theme.text())
        ));
        out.push_str(&format!(
            "  {}\n",
            format!("Temperature: {}°C", reading.temperature_c).with(theme.text())
        ));
        out.push_str(&format!(
            "  {}\n",
            format!(
                "Updated {}",
                reading.fetched_at.with_timezone(&Local).format("%H:%M")
            )
            .with(theme.dim())
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{CITY_NOT_FOUND_MESSAGE, FETCH_FAILED_MESSAGE};
    use chrono::{TimeZone, Utc};

    fn state() -> UiState {
        UiState {
            search_input: String::new(),
            location_label: "Johannesburg".to_string(),
            dark_mode: false,
            error: None,
        }
    }

    fn reading() -> WeatherReading {
        WeatherReading {
            label: "Your Location".to_string(),
            temperature_c: 19.5,
            wind_speed_kmh: 12.0,
            fetched_at: Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn loading_is_shown_before_the_first_result() {
        let out = render(&state(), None);
        assert!(out.contains("Loading..."));
    }

    #[test]
    fn reading_card_shows_label_wind_and_temperature() {
        let out = render(&state(), Some(&reading()));

        assert!(out.contains("Your Location"));
        assert!(out.contains("Wind: 12 km/h"));
        assert!(out.contains("Temperature: 19.5°C"));
        assert!(!out.contains("Loading"));
    }

    #[test]
    fn error_text_replaces_the_loading_line() {
        let mut s = state();
        s.error = Some(CITY_NOT_FOUND_MESSAGE.to_string());

        let out = render(&s, None);

        assert!(out.contains("City not found. Please try again."));
        assert!(!out.contains("Loading"));
    }

    #[test]
    fn error_and_reading_can_coexist() {
        let mut s = state();
        s.error = Some(FETCH_FAILED_MESSAGE.to_string());

        let out = render(&s, Some(&reading()));

        assert!(out.contains("Error fetching weather data"));
        assert!(out.contains("Temperature: 19.5°C"));
    }

    #[test]
    fn toggling_the_theme_twice_renders_identically() {
        let mut s = state();
        let original = render(&s, Some(&reading()));

        s.dark_mode = !s.dark_mode;
        s.dark_mode = !s.dark_mode;

        assert_eq!(render(&s, Some(&reading())), original);
    }

    #[test]
    fn themes_use_different_colors() {
        let mut s = state();
        let light = render(&s, Some(&reading()));
        s.dark_mode = true;
        let dark = render(&s, Some(&reading()));

        assert_ne!(light, dark);
    }
}
