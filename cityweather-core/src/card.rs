//! One forecast card: a location, its fetch task and the last outcome.
//!
//! A card goes `Idle -> Loading -> Loaded | FetchFailed`. The fetch runs on
//! its own tokio task so cards load concurrently; the task handle is owned by
//! the card and aborted when the card is refreshed or dropped, so a result
//! never lands on a card that is gone.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{
    error::Failure,
    location::{Location, parse_resolved_address},
    model::{ForecastResponse, ForecastView, TimeOfDay},
    provider::ForecastProvider,
    view::{forecast_view, placeholder_view},
};

#[derive(Debug, Default)]
pub enum CardState {
    #[default]
    Idle,
    Loading,
    Loaded(ForecastResponse),
    FetchFailed(Failure),
}

impl CardState {
    pub fn name(&self) -> &'static str {
        match self {
            CardState::Idle => "idle",
            CardState::Loading => "loading",
            CardState::Loaded(_) => "loaded",
            CardState::FetchFailed(_) => "failed",
        }
    }
}

#[derive(Debug)]
pub struct ForecastCard {
    location: Location,
    state: CardState,
    task: Option<JoinHandle<Result<ForecastResponse, Failure>>>,
}

impl ForecastCard {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            state: CardState::Idle,
            task: None,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn failure(&self) -> Option<&Failure> {
        match &self.state {
            CardState::FetchFailed(failure) => Some(failure),
            _ => None,
        }
    }

    /// The card became visible. Starts the fetch if the card is idle, otherwise
    /// does nothing. Must be called from within a tokio runtime.
    pub fn appear(&mut self, provider: Arc<dyn ForecastProvider>) {
        if !matches!(self.state, CardState::Idle) {
            return;
        }

        let location = self.location.clone();
        self.task = Some(tokio::spawn(async move { provider.fetch(&location).await }));
        self.state = CardState::Loading;
    }

    /// Wait for the in-flight fetch, if any, and apply its outcome.
    pub async fn settle(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };

        let outcome = task.await.map_err(Failure::from).and_then(|result| result);
        self.apply(outcome);
    }

    /// Drop whatever was loaded and go back to idle so the next `appear`
    /// fetches again.
    pub fn refresh(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.state = CardState::Idle;
    }

    pub fn view(&self, time: TimeOfDay) -> ForecastView {
        let title = self.location.display_name();

        let loaded = match &self.state {
            CardState::Loaded(response) => forecast_view(&title, response, time),
            _ => None,
        };

        loaded.unwrap_or_else(|| placeholder_view(title))
    }

    fn apply(&mut self, outcome: Result<ForecastResponse, Failure>) {
        let name = self.location.display_name();

        match outcome {
            Ok(response) => {
                let resolved_address = &response.resolved_address;
                match parse_resolved_address(resolved_address) {
                    Some(resolved) if resolved != self.location => {
                        tracing::info!("Resolved '{name}' to '{resolved_address}'");
                        self.location = resolved;
                    }
                    Some(_) => {}
                    None => {
                        tracing::warn!("Unparseable resolved address '{resolved_address}'");
                    }
                }
                self.state = CardState::Loaded(response);
            }
            Err(failure) => {
                tracing::warn!("Forecast for '{name}' failed: {failure}");
                self.state = CardState::FetchFailed(failure);
            }
        }
    }
}

impl Drop for ForecastCard {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
