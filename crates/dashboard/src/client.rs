//! HTTP client for the parkcast API server.
//!
//! The dashboard treats the server's payloads as opaque wire data: no
//! types are shared with the server crates, mirroring how an external
//! client would integrate.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A `[low, high]` forecast pair as received over the wire.
pub type Interval = (i64, i64);

/// Per-location forecast for a single date.
pub type Forecast = BTreeMap<String, Interval>;

/// Per-location, per-day forecast. Day keys are ISO dates, so the
/// `BTreeMap` ordering is already chronological.
pub type RangeForecast = BTreeMap<String, BTreeMap<String, Interval>>;

/// Reply from the progress endpoint: either a status record or an error
/// field (the server reports both with a success status).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProgressReply {
    Status { status: String, message: String },
    Error { error: String },
}

#[derive(Serialize)]
struct RangeRequestBody<'a> {
    locations: &'a [String],
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct UploadReply {
    session_id: String,
}

/// Client for the parkcast REST API.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a new client for `base_url`.
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let http = reqwest::Client::new();
        Self { base_url, http }
    }

    /// Check if the server is reachable.
    pub async fn health_check(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);
        self.http
            .get(&url)
            .timeout(std::time::Duration::from_secs(3))
            .send()
            .await
            .context("server not reachable")?;
        Ok(())
    }

    /// Fetch the known location set, canonical order.
    pub async fn locations(&self) -> Result<Vec<String>> {
        let url = format!("{}/locations", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .context("failed to fetch locations")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("server returned {}: {}", status, body);
        }

        resp.json().await.context("failed to parse locations")
    }

    /// Fetch the current forecast for every known location.
    ///
    /// Sent without a body: the server fills in all locations and today.
    pub async fn forecast_current(&self) -> Result<Forecast> {
        let url = format!("{}/prognose", self.base_url);
        let resp = self
            .http
            .post(&url)
            .send()
            .await
            .context("failed to fetch forecast")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("server returned {}: {}", status, body);
        }

        resp.json().await.context("failed to parse forecast")
    }

    /// Fetch a per-day forecast over `[start, end]` inclusive.
    pub async fn forecast_range(
        &self,
        locations: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RangeForecast> {
        let url = format!("{}/prognose_range", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(&RangeRequestBody {
                locations,
                start,
                end,
            })
            .send()
            .await
            .context("failed to fetch range forecast")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("server returned {}: {}", status, body);
        }

        resp.json().await.context("failed to parse range forecast")
    }

    /// Upload a file and return the new session id.
    pub async fn upload(&self, path: &Path) -> Result<String> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin")
            .to_string();
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = format!("{}/upload/", self.base_url);
        let resp = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("upload failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("server returned {}: {}", status, body);
        }

        let reply: UploadReply = resp.json().await.context("failed to parse upload reply")?;
        Ok(reply.session_id)
    }

    /// Fetch the progress record for `session_id`.
    pub async fn progress(&self, session_id: &str) -> Result<ProgressReply> {
        let url = format!("{}/progress/{}", self.base_url, session_id);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .context("failed to fetch progress")?;

        if !resp.status().is_success() {
            bail!("server returned {}", resp.status());
        }

        resp.json().await.context("failed to parse progress reply")
    }
}
