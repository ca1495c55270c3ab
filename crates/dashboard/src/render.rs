//! Text rendering for dashboard output.
//!
//! All functions are pure string builders so they can be unit tested
//! without a terminal or a running server.

use crate::client::{Forecast, RangeForecast};

/// Fraction of the progress bar filled per reported status.
///
/// `loaded` is part of the table even though the current server never
/// reports it; unknown statuses render as zero progress.
pub fn progress_fraction(status: &str) -> f64 {
    match status {
        "starting" => 0.0,
        "loaded" => 0.2,
        "preprocessed" => 0.4,
        "main_process" => 0.6,
        "postprocess" => 0.8,
        "done" => 1.0,
        _ => 0.0,
    }
}

/// Fixed-width text progress bar, e.g. `[########            ]  40%`.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let clamped = fraction.clamp(0.0, 1.0);
    let filled = (clamped * width as f64).round() as usize;
    let mut bar = String::with_capacity(width + 8);
    bar.push('[');
    for i in 0..width {
        bar.push(if i < filled { '#' } else { ' ' });
    }
    bar.push(']');
    format!("{bar} {:3.0}%", clamped * 100.0)
}

/// `mid ± half` summary for a low/high pair, using the integer
/// arithmetic the overview displays.
pub fn metric_summary(low: i64, high: i64) -> String {
    format!("{} ± {}", (low + high) / 2, (high - low) / 2)
}

/// Render the single-date overview as one metric line per location.
pub fn render_overview(forecast: &Forecast) -> String {
    let mut out = String::from("Current forecast:\n");
    for (location, (low, high)) in forecast {
        out.push_str(&format!(
            "  {location:<24} {}\n",
            metric_summary(*low, *high)
        ));
    }
    out
}

/// Render a range forecast as one date-sorted table per location.
pub fn render_range(forecast: &RangeForecast) -> String {
    let mut out = String::new();
    for (location, days) in forecast {
        out.push_str(&format!("{location}\n"));
        out.push_str("  date          low  high\n");
        for (day, (low, high)) in days {
            out.push_str(&format!("  {day}    {low:>3}   {high:>3}\n"));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn fraction_table_matches_fixed_mapping() {
        assert_eq!(progress_fraction("starting"), 0.0);
        assert_eq!(progress_fraction("loaded"), 0.2);
        assert_eq!(progress_fraction("preprocessed"), 0.4);
        assert_eq!(progress_fraction("main_process"), 0.6);
        assert_eq!(progress_fraction("postprocess"), 0.8);
        assert_eq!(progress_fraction("done"), 1.0);
    }

    #[test]
    fn unknown_status_renders_as_zero() {
        assert_eq!(progress_fraction("mystery_phase"), 0.0);
    }

    #[test]
    fn bar_endpoints() {
        assert_eq!(progress_bar(0.0, 10), "[          ]   0%");
        assert_eq!(progress_bar(1.0, 10), "[##########] 100%");
    }

    #[test]
    fn bar_midpoint_rounds_fill() {
        assert_eq!(progress_bar(0.4, 10), "[####      ]  40%");
    }

    #[test]
    fn metric_summary_uses_integer_division() {
        // (20 + 29) / 2 = 24, (29 - 20) / 2 = 4, truncating as displayed.
        assert_eq!(metric_summary(20, 29), "24 ± 4");
        assert_eq!(metric_summary(40, 46), "43 ± 3");
    }

    #[test]
    fn overview_lists_each_location_once() {
        let mut forecast = BTreeMap::new();
        forecast.insert("Schmilka".to_string(), (30, 37));
        forecast.insert("Bad Schandau P+R".to_string(), (50, 55));

        let out = render_overview(&forecast);
        assert!(out.contains("Schmilka"));
        assert!(out.contains("33 ± 3"));
        assert!(out.contains("Bad Schandau P+R"));
        assert!(out.contains("52 ± 2"));
    }

    #[test]
    fn range_table_is_date_sorted() {
        let mut days = BTreeMap::new();
        days.insert("2025-03-02".to_string(), (40, 45));
        days.insert("2025-03-01".to_string(), (30, 36));
        let mut forecast = BTreeMap::new();
        forecast.insert("Schmilka".to_string(), days);

        let out = render_range(&forecast);
        let first = out.find("2025-03-01").unwrap();
        let second = out.find("2025-03-02").unwrap();
        assert!(first < second);
    }
}
