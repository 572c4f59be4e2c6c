use anyhow::Context;
use cityweather_core::{Config, ForecastCard, Location, TimeOfDay, provider_from_config};
use clap::{Args, Parser, Subcommand};
use inquire::Password;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Five-day forecasts for a list of cities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the Visual Crossing API key.
    Configure {
        /// Key to store; prompted for when absent.
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Show the forecast for one location.
    Show {
        /// City name, e.g. "New York".
        city: String,

        #[arg(long)]
        state: Option<String>,

        #[arg(long)]
        country: Option<String>,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Show the forecast for every configured location.
    List {
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Print the configured locations and the query sent for each.
    Locations,
}

#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// Use night icons.
    #[arg(long)]
    night: bool,

    /// Also print daily max/min temperatures.
    #[arg(long)]
    detailed: bool,
}

impl DisplayArgs {
    fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_night_flag(self.night)
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { api_key } => configure(api_key),
            Command::Show {
                city,
                state,
                country,
                display,
            } => {
                let mut location = Location::new(city)?;
                if let Some(state) = state {
                    location = location.with_state(state);
                }
                if let Some(country) = country {
                    location = location.with_country(country);
                }
                show_cards(vec![location], &display).await
            }
            Command::List { display } => {
                let config = Config::load()?;
                show_cards(config.locations(), &display).await
            }
            Command::Locations => {
                let config = Config::load()?;
                for location in config.locations() {
                    let name = location.display_name();
                    println!("{name:<24} {}", location.query_segment());
                }
                Ok(())
            }
        }
    }
}

fn configure(api_key: Option<String>) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = match api_key {
        Some(key) => key,
        None => Password::new("Visual Crossing API key:")
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?,
    };

    if api_key.trim().is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    let path = Config::config_file_path()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

/// Every card appears at once so the fetches run concurrently; results are
/// printed in card order.
async fn show_cards(locations: Vec<Location>, display: &DisplayArgs) -> anyhow::Result<()> {
    let config = Config::load()?.with_env_overrides();
    let provider = provider_from_config(&config)?;

    let mut cards: Vec<ForecastCard> = locations.into_iter().map(ForecastCard::new).collect();
    for card in &mut cards {
        card.appear(provider.clone());
    }

    for card in &mut cards {
        card.settle().await;
        let text = render::card(card, display.time_of_day(), display.detailed);
        println!("{text}");
    }

    Ok(())
}
