//! Turns a decoded forecast into the per-day view-model a card renders.

use chrono::{Datelike, NaiveDate};

use crate::{
    condition::{DEFAULT_ICON, icon_for},
    error::Failure,
    model::{DayViewModel, ForecastDay, ForecastResponse, ForecastView, TimeOfDay},
};

pub const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Label used when a day's date cannot be parsed.
pub const UNKNOWN_WEEKDAY: &str = "—";

/// Number of days shown after today.
pub const UPCOMING_DAYS: usize = 5;

const PLACEHOLDER_DAYS: [(&str, i32, &str); 5] = [
    ("TUE", 62, "cloud.sun.fill"),
    ("WED", 63, "sun.max.fill"),
    ("THU", 64, "wind"),
    ("FRI", 65, "cloud.rain.fill"),
    ("SAT", 66, "snow"),
];

/// Three-letter weekday for an upstream "yyyy-MM-dd" date.
pub fn weekday_label(date: &str) -> Result<&'static str, Failure> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| Failure::InvalidDate(date.to_string()))?;

    Ok(WEEKDAYS[parsed.weekday().num_days_from_sunday() as usize])
}

pub fn rounded_temperature(temp: f64) -> i32 {
    temp.round() as i32
}

/// View-model for one day, falling back to the default icon and the
/// unknown-weekday label instead of failing.
pub fn day_view(day: &ForecastDay, time: TimeOfDay) -> DayViewModel {
    let weekday_label = weekday_label(&day.date).unwrap_or_else(|err| {
        tracing::warn!("{err}; showing '{UNKNOWN_WEEKDAY}'");
        UNKNOWN_WEEKDAY
    });

    let icon_key = icon_for(&day.conditions_raw, time).unwrap_or_else(|err| {
        tracing::warn!("{err}; using default icon");
        DEFAULT_ICON
    });

    DayViewModel {
        weekday_label: weekday_label.to_string(),
        icon_key: icon_key.to_string(),
        temperature_rounded: rounded_temperature(day.temp),
    }
}

/// Today plus up to five following days. Returns `None` when the response
/// carries no days at all.
pub fn forecast_view(
    title: impl Into<String>,
    response: &ForecastResponse,
    time: TimeOfDay,
) -> Option<ForecastView> {
    let today = day_view(response.today()?, time);
    let upcoming = response.days[1..]
        .iter()
        .take(UPCOMING_DAYS)
        .map(|d| day_view(d, time))
        .collect();

    Some(ForecastView {
        title: title.into(),
        today,
        upcoming,
        stale: false,
    })
}

/// Static data shown before a forecast arrives or after a fetch failed.
/// The first placeholder doubles as today; the day/night flag does not apply.
pub fn placeholder_view(title: impl Into<String>) -> ForecastView {
    let upcoming: Vec<DayViewModel> = PLACEHOLDER_DAYS
        .iter()
        .map(|(label, temp, icon)| DayViewModel {
            weekday_label: label.to_string(),
            icon_key: icon.to_string(),
            temperature_rounded: *temp,
        })
        .collect();

    ForecastView {
        title: title.into(),
        today: upcoming[0].clone(),
        upcoming,
        stale: true,
    }
}
