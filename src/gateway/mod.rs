pub mod models;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use tracing::debug;

use crate::{
    config::Config,
    error::GatewayError,
    model::{Classification, Reading, SensorValues},
};

use self::models::{ReadingsPage, SubmitReadingRequest, SubmitReadingResponse, WireValues};

/// The three remote operations the dashboard drives.
///
/// Controller tests substitute a scripted stub for the HTTP client behind
/// this trait.
#[async_trait]
pub trait SensorApi {
    /// Full reading list for a unit, ordered by time ascending.
    async fn fetch_readings(&self, unit_id: &str) -> Result<Vec<Reading>, GatewayError>;

    /// "Needs Attention" readings only, ordered by time ascending.
    async fn fetch_alerts(&self, unit_id: &str) -> Result<Vec<Reading>, GatewayError>;

    /// Submit one reading to the ingest endpoint; returns the verdict the
    /// remote classifier assigned to it.
    async fn submit_reading(
        &self,
        unit_id: &str,
        values: SensorValues,
    ) -> Result<Classification, GatewayError>;
}

#[derive(Debug, Clone)]
pub struct HydroClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    http: Client,
    base_url: String,
}

impl HydroClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Shared GET path for the two list endpoints; both return the
    /// `alerts`-named envelope.
    async fn fetch_page(&self, path: &str) -> Result<Vec<Reading>, GatewayError> {
        let url = format!("{}{}", self.inner.base_url, path);
        debug!(url = %url, "Fetching reading collection");

        let resp = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(GatewayError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GatewayError::Remote { status });
        }

        let bytes = resp.bytes().await.map_err(GatewayError::Network)?;
        let page: ReadingsPage =
            serde_json::from_slice(&bytes).map_err(GatewayError::Malformed)?;

        Ok(page.alerts.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl SensorApi for HydroClient {
    async fn fetch_readings(&self, unit_id: &str) -> Result<Vec<Reading>, GatewayError> {
        self.fetch_page(&format!("/api/readings/{unit_id}")).await
    }

    async fn fetch_alerts(&self, unit_id: &str) -> Result<Vec<Reading>, GatewayError> {
        self.fetch_page(&format!("/api/alerts/{unit_id}")).await
    }

    async fn submit_reading(
        &self,
        unit_id: &str,
        values: SensorValues,
    ) -> Result<Classification, GatewayError> {
        let url = format!("{}/api/sensor", self.inner.base_url);
        let body = SubmitReadingRequest {
            unit_id: unit_id.to_owned(),
            timestamp: Utc::now(),
            readings: WireValues::from(values),
        };
        debug!(unit_id = %unit_id, url = %url, "Submitting sensor reading");

        let resp = self
            .inner
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(GatewayError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GatewayError::Remote { status });
        }

        let bytes = resp.bytes().await.map_err(GatewayError::Network)?;
        let ack: SubmitReadingResponse =
            serde_json::from_slice(&bytes).map_err(GatewayError::Malformed)?;
        debug!(status = %ack.status, classification = %ack.classification, "Ingest acknowledged");

        Ok(ack.classification)
    }
}
