//! Integration tests for the locations and forecast endpoints.

mod common;

use axum::http::StatusCode;
use chrono::{Days, Local};
use common::{body_json, get, post_empty, post_json};
use serde_json::json;

const ALL_LOCATIONS: [&str; 3] = [
    "Bad Schandau P+R",
    "Bad Schandau Elbbrücke",
    "Schmilka",
];

/// Every value must be a `[low, high]` pair within the generator bounds.
fn assert_interval(value: &serde_json::Value) {
    let pair = value.as_array().expect("interval must be an array");
    assert_eq!(pair.len(), 2);
    let low = pair[0].as_i64().unwrap();
    let high = pair[1].as_i64().unwrap();
    assert!((20..=90).contains(&low), "low out of range: {low}");
    assert!((3..=9).contains(&(high - low)), "spread out of range: {high}");
}

// ---------------------------------------------------------------------------
// Test: GET /locations returns the canonical ordered set
// ---------------------------------------------------------------------------

#[tokio::test]
async fn locations_returns_canonical_order() {
    let app = common::build_test_app();
    let response = get(app, "/locations").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(ALL_LOCATIONS));
}

// ---------------------------------------------------------------------------
// Test: POST /prognose with an empty JSON body covers every location
// ---------------------------------------------------------------------------

#[tokio::test]
async fn prognose_defaults_to_all_locations() {
    let app = common::build_test_app();
    let response = post_json(app, "/prognose", json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let map = body.as_object().unwrap();
    assert_eq!(map.len(), ALL_LOCATIONS.len());
    for location in ALL_LOCATIONS {
        assert_interval(&map[location]);
    }
}

// ---------------------------------------------------------------------------
// Test: POST /prognose with no body at all still works
// ---------------------------------------------------------------------------

#[tokio::test]
async fn prognose_without_body_uses_defaults() {
    let app = common::build_test_app();
    let response = post_empty(app, "/prognose").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_object().unwrap().len(), ALL_LOCATIONS.len());
}

// ---------------------------------------------------------------------------
// Test: unknown locations are dropped, not errored
// ---------------------------------------------------------------------------

#[tokio::test]
async fn prognose_filters_unknown_locations() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/prognose",
        json!({
            "locations": ["Schmilka", "Atlantis"],
            "date": "2025-06-01",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let map = body.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_interval(&map["Schmilka"]);
}

// ---------------------------------------------------------------------------
// Test: range forecast yields one entry per day, inclusive
// ---------------------------------------------------------------------------

#[tokio::test]
async fn prognose_range_covers_every_day() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/prognose_range",
        json!({
            "locations": ["Schmilka"],
            "start": "2025-03-01",
            "end": "2025-03-05",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let days = body["Schmilka"].as_object().unwrap();
    assert_eq!(days.len(), 5);
    for day in ["2025-03-01", "2025-03-02", "2025-03-03", "2025-03-04", "2025-03-05"] {
        assert_interval(&days[day]);
    }
}

// ---------------------------------------------------------------------------
// Test: inverted range yields empty per-location tables
// ---------------------------------------------------------------------------

#[tokio::test]
async fn prognose_range_with_inverted_range_is_empty_per_location() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/prognose_range",
        json!({
            "start": "2025-03-05",
            "end": "2025-03-01",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let map = body.as_object().unwrap();
    assert_eq!(map.len(), ALL_LOCATIONS.len());
    for location in ALL_LOCATIONS {
        assert!(map[location].as_object().unwrap().is_empty());
    }
}

// ---------------------------------------------------------------------------
// Test: range defaults to the trailing five-day window
// ---------------------------------------------------------------------------

#[tokio::test]
async fn prognose_range_defaults_to_trailing_window() {
    let app = common::build_test_app();
    let response = post_json(app, "/prognose_range", json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let today = Local::now().date_naive();
    let start = today - Days::new(4);

    for location in ALL_LOCATIONS {
        let days = body[location].as_object().unwrap();
        assert_eq!(days.len(), 5);
        assert!(days.contains_key(&start.to_string()));
        assert!(days.contains_key(&today.to_string()));
    }
}
