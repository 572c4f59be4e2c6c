use crate::{
    Config, ForecastResponse, Location, error::Failure,
    provider::visualcrossing::VisualCrossingProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod visualcrossing;

/// Source of forecasts for a card.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch(&self, location: &Location) -> Result<ForecastResponse, Failure>;
}

/// Construct the Visual Crossing provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn ForecastProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No Visual Crossing API key configured.\n\
                 Hint: run `cityweather configure` or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    let provider = VisualCrossingProvider::builder(api_key)
        .base_url(config.base_url())
        .unit_group(config.unit_group)
        .timeout_secs(config.timeout_secs)
        .build()?;

    Ok(Arc::new(provider))
}
