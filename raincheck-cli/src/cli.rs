use anyhow::Result;
use clap::Parser;
use inquire::{InquireError, Select, Text};
use raincheck_core::{Config, Coordinates, IpLocator, NominatimGeocoder, OpenMeteoProvider};

use crate::render;
use crate::widget::Widget;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "raincheck", version, about = "Terminal weather widget")]
pub struct Cli {
    /// Start with this city instead of detecting the current location.
    pub city: Option<String>,

    /// Start in the dark color theme.
    #[arg(long)]
    pub dark: bool,

    /// Skip location detection and start with the configured default city.
    #[arg(long)]
    pub no_detect: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;

        let forecast = OpenMeteoProvider::new()?;
        let geocoder = NominatimGeocoder::new()?;

        let dark_mode = self.dark || config.dark_mode;
        let mut widget = Widget::new(Box::new(forecast), Box::new(geocoder), &config, dark_mode);

        println!("{}", render::header(widget.state()));

        if let Some(city) = self.city {
            widget.set_search_input(city);
            widget.submit_search().await;
        } else {
            let detected = if self.no_detect || !config.detect_location {
                None
            } else {
                detect_location().await
            };
            widget.mount(detected).await;
        }

        interact(&mut widget).await
    }
}

/// Best-effort position detection; any failure falls back to the default city.
async fn detect_location() -> Option<Coordinates> {
    let locator = match IpLocator::new() {
        Ok(locator) => locator,
        Err(err) => {
            tracing::debug!("could not build the geolocation client: {err}");
            return None;
        }
    };

    match locator.detect().await {
        Ok(coordinates) => Some(coordinates),
        Err(err) => {
            tracing::debug!("location detection failed: {err}");
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Search,
    ToggleTheme,
    Quit,
}

impl Action {
    const ALL: [Action; 3] = [Action::Search, Action::ToggleTheme, Action::Quit];
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Action::Search => "Search for a city",
            Action::ToggleTheme => "Toggle dark/light mode",
            Action::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// The event loop: render, prompt, apply. Each action's network call is
/// awaited before the next prompt, so fetches never overlap.
async fn interact(widget: &mut Widget) -> Result<()> {
    loop {
        println!("\n{}", render::render(widget.state(), widget.reading()));

        let action = match Select::new("What next?", Action::ALL.to_vec()).prompt() {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        match action {
            Action::Search => {
                let input = match Text::new("Search for a city:").prompt() {
                    Ok(input) => input,
                    Err(InquireError::OperationCanceled) => continue,
                    Err(InquireError::OperationInterrupted) => return Ok(()),
                    Err(err) => return Err(err.into()),
                };
                widget.set_search_input(input);
                widget.submit_search().await;
            }
            Action::ToggleTheme => widget.toggle_dark_mode(),
            Action::Quit => return Ok(()),
        }
    }
}
