use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    config::{DEFAULT_BASE_URL, UnitGroup},
    error::Failure,
    location::Location,
    model::{ForecastDay, ForecastResponse},
};

use super::ForecastProvider;

const TIMELINE_PATH: &str = "/VisualCrossingWebServices/rest/services/timeline";
const RANGE: &str = "next5days";

#[derive(Debug, Clone)]
pub struct VisualCrossingProvider {
    api_key: String,
    base_url: String,
    unit_group: UnitGroup,
    http: Client,
}

#[derive(Debug)]
pub struct VisualCrossingBuilder {
    api_key: String,
    base_url: String,
    unit_group: UnitGroup,
    timeout: Option<Duration>,
}

impl VisualCrossingBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn unit_group(mut self, unit_group: UnitGroup) -> Self {
        self.unit_group = unit_group;
        self
    }

    pub fn timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.timeout = secs.map(Duration::from_secs);
        self
    }

    pub fn build(self) -> anyhow::Result<VisualCrossingProvider> {
        let mut http = Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(VisualCrossingProvider {
            api_key: self.api_key,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            unit_group: self.unit_group,
            http: http.build().context("Failed to build HTTP client")?,
        })
    }
}

impl VisualCrossingProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            unit_group: UnitGroup::default(),
            http: Client::new(),
        }
    }

    pub fn builder(api_key: impl Into<String>) -> VisualCrossingBuilder {
        VisualCrossingBuilder {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            unit_group: UnitGroup::default(),
            timeout: None,
        }
    }

    /// Timeline URL for today and the next five days at `location`.
    pub fn request_url(&self, location: &Location) -> String {
        format!(
            "{}{}/{}/{}?unitGroup={}&key={}",
            self.base_url,
            TIMELINE_PATH,
            location.query_segment(),
            RANGE,
            self.unit_group.as_str(),
            self.api_key,
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VcTimelineResponse {
    resolved_address: String,
    days: Vec<VcDay>,
}

#[derive(Debug, Deserialize)]
struct VcDay {
    datetime: String,
    conditions: String,
    tempmax: f64,
    tempmin: f64,
    temp: f64,
}

impl From<VcDay> for ForecastDay {
    fn from(day: VcDay) -> Self {
        ForecastDay {
            date: day.datetime,
            conditions_raw: day.conditions,
            temp_max: day.tempmax,
            temp_min: day.tempmin,
            temp: day.temp,
        }
    }
}

/// Strict decode of a timeline payload; a forecast without days is rejected.
pub fn decode_timeline(body: &str) -> Result<ForecastResponse, Failure> {
    let parsed: VcTimelineResponse = serde_json::from_str(body)?;

    if parsed.days.is_empty() {
        return Err(Failure::Decode("timeline response had no days".into()));
    }

    Ok(ForecastResponse {
        resolved_address: parsed.resolved_address,
        days: parsed.days.into_iter().map(ForecastDay::from).collect(),
    })
}

#[async_trait]
impl ForecastProvider for VisualCrossingProvider {
    async fn fetch(&self, location: &Location) -> Result<ForecastResponse, Failure> {
        tracing::debug!(
            "Requesting Visual Crossing timeline for '{}'",
            location.display_name()
        );

        let res = self.http.get(self.request_url(location)).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(Failure::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        decode_timeline(&body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
