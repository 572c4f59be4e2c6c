use std::fmt::Write;

use cityweather_core::{
    CardState, DayViewModel, Failure, ForecastCard, ForecastResponse, ForecastView, TimeOfDay,
};

pub fn card(card: &ForecastCard, time: TimeOfDay, detailed: bool) -> String {
    let mut out = view(&card.view(time), card.failure());

    if let (true, CardState::Loaded(response)) = (detailed, card.state()) {
        out.push_str(&extremes(response));
    }

    out
}

pub fn view(view: &ForecastView, failure: Option<&Failure>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.title);
    if view.stale {
        let reason = failure.map_or("No forecast loaded.", Failure::user_message);
        let _ = writeln!(out, "  (placeholder data: {reason})");
    }
    let icon = &view.today.icon_key;
    let temp = view.today.temperature_rounded;
    let _ = writeln!(out, "  now  {icon:<20} {temp:>4}°");

    for day in &view.upcoming {
        let _ = writeln!(out, "{}", day_line(day));
    }

    out
}

fn day_line(day: &DayViewModel) -> String {
    let temp = day.temperature_rounded;
    format!("  {:<4} {:<20} {temp:>4}°", day.weekday_label, day.icon_key)
}

fn extremes(response: &ForecastResponse) -> String {
    let mut out = String::from("  max/min:");
    for day in response.days.iter().take(6) {
        let (max, min) = (day.temp_max, day.temp_min);
        let _ = write!(out, " {}: {max:.0}/{min:.0}", day.date);
    }
    out.push('\n');
    out
}
