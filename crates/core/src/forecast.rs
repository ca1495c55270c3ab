//! Synthetic visitor forecasts.
//!
//! Every call generates fresh random intervals; nothing is read from
//! historical state. Unknown locations are silently dropped rather than
//! rejected, so callers can pass user input through unchecked.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

/// The locations the report service knows about, in canonical order.
pub const LOCATIONS: [&str; 3] = [
    "Bad Schandau P+R",
    "Bad Schandau Elbbrücke",
    "Schmilka",
];

/// A low/high estimate pair. Serializes as `[low, high]`.
///
/// `low` is uniform in `[20, 90]`, `high` exceeds it by a uniform
/// `[3, 9]`, so `low < high` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForecastInterval(pub i32, pub i32);

impl ForecastInterval {
    /// Draw a fresh interval from the thread rng.
    pub fn sample() -> Self {
        let mut rng = rand::rng();
        let low = rng.random_range(20..=90);
        let high = low + rng.random_range(3..=9);
        Self(low, high)
    }

    pub fn low(&self) -> i32 {
        self.0
    }

    pub fn high(&self) -> i32 {
        self.1
    }
}

/// True if `name` is one of the known locations.
pub fn is_known_location(name: &str) -> bool {
    LOCATIONS.contains(&name)
}

/// The known location set as owned strings, canonical order.
pub fn all_locations() -> Vec<String> {
    LOCATIONS.iter().map(|s| s.to_string()).collect()
}

/// One fresh interval per requested location that is a member of the
/// known set.
pub fn forecast(locations: &[String]) -> BTreeMap<String, ForecastInterval> {
    locations
        .iter()
        .filter(|loc| is_known_location(loc))
        .map(|loc| (loc.clone(), ForecastInterval::sample()))
        .collect()
}

/// One independently randomized interval per calendar day in
/// `[start, end]` inclusive, per valid location.
///
/// An inverted range iterates zero days: every valid location still gets
/// an entry, mapped to an empty per-day table. Rejecting inverted input
/// is the caller's job.
pub fn forecast_range(
    locations: &[String],
    start: NaiveDate,
    end: NaiveDate,
) -> BTreeMap<String, BTreeMap<NaiveDate, ForecastInterval>> {
    locations
        .iter()
        .filter(|loc| is_known_location(loc))
        .map(|loc| {
            let days: BTreeMap<NaiveDate, ForecastInterval> = start
                .iter_days()
                .take_while(|day| *day <= end)
                .map(|day| (day, ForecastInterval::sample()))
                .collect();
            (loc.clone(), days)
        })
        .collect()
}
