use serde::{Deserialize, Serialize};

/// One decoded day of the timeline. `date` stays as the upstream
/// "yyyy-MM-dd" text so a bad date only affects its own label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub conditions_raw: String,
    pub temp_max: f64,
    pub temp_min: f64,
    pub temp: f64,
}

/// Result of one fetch; index 0 of `days` is today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub resolved_address: String,
    pub days: Vec<ForecastDay>,
}

impl ForecastResponse {
    pub fn today(&self) -> Option<&ForecastDay> {
        self.days.first()
    }
}

/// The day/night flag that selects an icon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
}

impl TimeOfDay {
    pub fn from_night_flag(is_night: bool) -> Self {
        if is_night {
            TimeOfDay::Night
        } else {
            TimeOfDay::Day
        }
    }
}

/// What a renderer needs for one day slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayViewModel {
    pub weekday_label: String,
    pub icon_key: String,
    pub temperature_rounded: i32,
}

/// A whole card, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastView {
    pub title: String,
    pub today: DayViewModel,
    pub upcoming: Vec<DayViewModel>,
    /// Placeholder data is shown because no forecast has been loaded.
    pub stale: bool,
}
