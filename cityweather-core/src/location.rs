//! Locations and the two strings derived from them: the card title and the
//! path segment sent to Visual Crossing.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

const UNITED_STATES: &str = "United States";

/// A city plus optional disambiguators. `city` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LocationFields")]
pub struct Location {
    city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
}

#[derive(Deserialize)]
struct LocationFields {
    city: String,
    state: Option<String>,
    country: Option<String>,
}

impl TryFrom<LocationFields> for Location {
    type Error = anyhow::Error;

    fn try_from(fields: LocationFields) -> Result<Self> {
        let mut location = Location::new(fields.city)?;
        location.state = fields.state;
        location.country = fields.country;
        Ok(location)
    }
}

impl Location {
    pub fn new(city: impl Into<String>) -> Result<Self> {
        let city = city.into();
        if city.trim().is_empty() {
            return Err(anyhow!("Location city must not be empty"));
        }

        Ok(Self {
            city,
            state: None,
            country: None,
        })
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Human-readable title, e.g. "Naples, FL" or "London, UK".
    ///
    /// When both disambiguators are known, a US state wins over the literal
    /// "United States", while any other country wins over its state.
    pub fn display_name(&self) -> String {
        let suffix = match (self.state(), self.country()) {
            (None, None) => return self.city.clone(),
            (Some(state), None) => state,
            (None, Some(country)) => country,
            (Some(state), Some(UNITED_STATES)) => state,
            (Some(_), Some(country)) => country,
        };

        format!("{}, {}", self.city, suffix)
    }

    /// Path segment for the timeline endpoint: `city[,state][,country]`.
    ///
    /// Only spaces are escaped; any other reserved character goes through as is.
    pub fn query_segment(&self) -> String {
        let mut segment = self.city.clone();
        for part in [self.state(), self.country()].into_iter().flatten() {
            segment.push(',');
            segment.push_str(part);
        }

        segment.replace(' ', "%20")
    }
}

/// Best-effort split of the upstream `resolvedAddress` back into a location.
///
/// "Naples, FL, United States" gives city/state/country, "London, UK" gives
/// city/country. Anything past the third segment is ignored. Returns `None`
/// if there is no usable city.
pub fn parse_resolved_address(resolved: &str) -> Option<Location> {
    let mut parts = resolved.split(", ");
    let mut location = Location::new(parts.next()?).ok()?;

    match (parts.next(), parts.next()) {
        (Some(country), None) => location.country = Some(country.to_string()),
        (Some(state), Some(country)) => {
            location.state = Some(state.to_string());
            location.country = Some(country.to_string());
        }
        _ => {}
    }

    Some(location)
}

/// The cards shown when nothing else is configured.
pub fn seed_locations() -> Vec<Location> {
    let seeds: [(&str, Option<&str>, Option<&str>); 7] = [
        ("Philadelphia", None, None),
        ("Naples", Some("FL"), None),
        ("Naples", None, None),
        ("London", None, Some("UK")),
        ("New York", None, None),
        ("Iqaluit", None, None),
        ("Portland", None, None),
    ];

    seeds
        .into_iter()
        .map(|(city, state, country)| Location {
            city: city.to_string(),
            state: state.map(str::to_string),
            country: country.map(str::to_string),
        })
        .collect()
}
