//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Locations and how they are formatted for display and for requests
//! - The Visual Crossing timeline client
//! - Normalization of a forecast into per-day view-models
//! - Forecast cards that own one fetch each
//! - Configuration & credentials handling
//!
//! It is used by `cityweather-cli`, but can also be reused by other front ends.

pub mod card;
pub mod condition;
pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod provider;
pub mod view;

pub use card::{CardState, ForecastCard};
pub use condition::{Condition, DEFAULT_ICON};
pub use config::{Config, UnitGroup};
pub use error::Failure;
pub use location::{Location, parse_resolved_address, seed_locations};
pub use model::{DayViewModel, ForecastDay, ForecastResponse, ForecastView, TimeOfDay};
pub use provider::{ForecastProvider, provider_from_config};
