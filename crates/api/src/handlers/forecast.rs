//! Handlers for the report endpoints: locations and forecasts.

use std::collections::BTreeMap;

use axum::Json;
use chrono::{Days, Local, NaiveDate};
use serde::Deserialize;

use parkcast_core::forecast::{self, ForecastInterval};

/// Request body for the single-date forecast. The body itself and both
/// fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct ForecastRequest {
    pub locations: Option<Vec<String>>,
    pub date: Option<NaiveDate>,
}

/// Request body for the date-range forecast.
#[derive(Debug, Default, Deserialize)]
pub struct ForecastRangeRequest {
    pub locations: Option<Vec<String>>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// GET /locations
///
/// The known location set, canonical order.
pub async fn list_locations() -> Json<Vec<String>> {
    Json(forecast::all_locations())
}

/// POST /prognose
///
/// Fresh interval per requested known location. The date defaults to
/// today and does not influence the generated values.
pub async fn prognose(
    body: Option<Json<ForecastRequest>>,
) -> Json<BTreeMap<String, ForecastInterval>> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let locations = request.locations.unwrap_or_else(forecast::all_locations);
    let date = request.date.unwrap_or_else(today);

    tracing::info!(%date, count = locations.len(), "Forecast requested");

    Json(forecast::forecast(&locations))
}

/// POST /prognose_range
///
/// Per-day intervals over `[start, end]` inclusive. Defaults to the
/// trailing five-day window ending today. An inverted range produces an
/// empty per-day table for every valid location.
pub async fn prognose_range(
    body: Option<Json<ForecastRangeRequest>>,
) -> Json<BTreeMap<String, BTreeMap<NaiveDate, ForecastInterval>>> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let locations = request.locations.unwrap_or_else(forecast::all_locations);
    let end = request.end.unwrap_or_else(today);
    let start = request
        .start
        .unwrap_or_else(|| today() - Days::new(4));

    tracing::info!(%start, %end, count = locations.len(), "Range forecast requested");

    Json(forecast::forecast_range(&locations, start, end))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
