//! Mapping from Visual Crossing condition strings to icon keys.

use crate::{error::Failure, model::TimeOfDay};

/// Icon shown when the upstream reports a condition we have no icon for.
pub const DEFAULT_ICON: &str = "questionmark.circle";

/// The condition tags with a known icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Rain,
    Overcast,
    PartiallyCloudy,
    Clear,
    Snow,
}

impl Condition {
    pub const fn all() -> &'static [Condition] {
        &[
            Condition::Rain,
            Condition::Overcast,
            Condition::PartiallyCloudy,
            Condition::Clear,
            Condition::Snow,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Rain => "Rain",
            Condition::Overcast => "Overcast",
            Condition::PartiallyCloudy => "Partially cloudy",
            Condition::Clear => "Clear",
            Condition::Snow => "Snow",
        }
    }

    pub fn icon(&self, time: TimeOfDay) -> &'static str {
        match (self, time) {
            (Condition::Rain, _) => "cloud.rain.fill",
            (Condition::Overcast, _) => "cloud.fill",
            (Condition::PartiallyCloudy, TimeOfDay::Day) => "cloud.sun.fill",
            (Condition::PartiallyCloudy, TimeOfDay::Night) => "cloud.moon.fill",
            (Condition::Clear, TimeOfDay::Day) => "sun.max.fill",
            (Condition::Clear, TimeOfDay::Night) => "moon.fill",
            (Condition::Snow, _) => "snow",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Condition {
    type Error = Failure;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Condition::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| Failure::UnmappedCondition(value.to_string()))
    }
}

/// First tag of a comma-joined conditions string ("Rain, Overcast" -> "Rain").
pub fn condition_tag(conditions_raw: &str) -> &str {
    conditions_raw.split(", ").next().unwrap_or_default()
}

/// Icon key for the leading condition tag.
pub fn icon_for(conditions_raw: &str, time: TimeOfDay) -> Result<&'static str, Failure> {
    Condition::try_from(condition_tag(conditions_raw)).map(|c| c.icon(time))
}
