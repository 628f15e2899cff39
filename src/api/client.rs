//! Bug tracker client implementations.
//!
//! The capability set (login, fetch by ID, create) is a trait so that
//! additional tracker backends can be added without touching calling
//! code. OpenRadar is the one implementation today.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::{json, Value};
use tracing::{debug, info, instrument};

use super::error::{Result, SonarError};
use super::types::Radar;
use crate::parse::map_radar_fields;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The production OpenRadar endpoint.
pub const OPENRADAR_BASE_URL: &str = "https://openradar.appspot.com";

/// Supplies a two-factor code entered by the user.
///
/// Trackers that gate login behind two-factor authentication call this to
/// prompt for a code. Backends that don't need one accept a provider for
/// interface symmetry and never invoke it.
#[async_trait]
pub trait TwoFactorProvider: Send + Sync {
    /// Ask the user for a code, returning `None` if they decline.
    async fn two_factor_code(&self) -> Option<String>;
}

/// A bug tracker backend.
///
/// All operations are single-shot async calls; each resolves exactly once
/// with either the success value or a [`SonarError`]. Concurrent calls on
/// the same client are safe.
#[async_trait]
pub trait BugTracker: Send + Sync {
    /// Log in to the tracker.
    async fn login(&self, provider: &dyn TwoFactorProvider) -> Result<()>;

    /// Fetch a single radar by its numeric ID.
    async fn fetch(&self, radar_id: i64) -> Result<Radar>;

    /// Create a ticket from the given radar, returning its ID.
    async fn create(&self, radar: &Radar) -> Result<i64>;
}

/// The OpenRadar backend.
///
/// Carries an opaque token as a default `Authorization` header on every
/// request. Fetching works without authentication.
#[derive(Debug)]
pub struct OpenRadar {
    client: Client,
    base_url: String,
}

impl OpenRadar {
    /// Create a client against the production OpenRadar endpoint.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, OPENRADAR_BASE_URL)
    }

    /// Create a client against an explicit base URL.
    ///
    /// Use this for testing or self-hosted deployments.
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let client = build_http_client(token)?;
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl BugTracker for OpenRadar {
    /// Always succeeds immediately: the token rides along on every
    /// request, and OpenRadar has no two-factor flow, so the provider is
    /// never consulted.
    async fn login(&self, _provider: &dyn TwoFactorProvider) -> Result<()> {
        Ok(())
    }

    #[instrument(skip(self))]
    async fn fetch(&self, radar_id: i64) -> Result<Radar> {
        if radar_id <= 0 {
            return Err(SonarError::new("Invalid radar ID"));
        }

        debug!("Fetching radar");
        let url = format!("{}/api/radar?number={}", self.base_url, radar_id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(%status, "Fetch failed");
            return Err(SonarError::from_status(status, &body));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|_| SonarError::new("Unable to parse JSON"))?;
        let result = payload
            .get("result")
            .filter(|value| value.is_object())
            .ok_or_else(|| SonarError::new("Unable to parse JSON"))?;

        let radar = map_radar_fields(result);
        debug!(title = %radar.title, "Fetched radar");
        Ok(radar)
    }

    #[instrument(skip(self, radar))]
    async fn create(&self, radar: &Radar) -> Result<i64> {
        // This backend assumes the ticket shell already exists and this
        // call fills in its content, so the radar must carry its ID.
        let id = radar.id.ok_or_else(|| SonarError::new("Invalid radar ID"))?;

        let url = format!("{}/api/radar", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&create_payload(radar))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(%status, "Create failed");
            return Err(SonarError::from_status(status, &body));
        }

        info!(id, "Created radar");
        Ok(id)
    }
}

/// Build the HTTP client with the token attached as a default header.
fn build_http_client(token: &str) -> Result<Client> {
    let mut value = header::HeaderValue::from_str(token)
        .map_err(|_| SonarError::new("Invalid API token"))?;
    value.set_sensitive(true);

    let mut headers = header::HeaderMap::new();
    headers.insert(header::AUTHORIZATION, value);

    Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .default_headers(headers)
        .build()
        .map_err(SonarError::from)
}

/// Build the request body for creating a ticket.
///
/// The backend does not return a server-assigned ID, so the radar's own
/// number is part of the payload.
fn create_payload(radar: &Radar) -> Value {
    json!({
        "number": radar.id,
        "title": radar.title,
        "classification": radar.classification.name(),
        "product": radar.product.name(),
        "reproducible": radar.reproducibility.name(),
        "product_version": radar.version,
        "description": radar.description,
        "steps": radar.steps,
        "expected": radar.expected,
        "actual": radar.actual,
        "configuration": radar.configuration,
        "notes": radar.notes,
    })
}

/// Normalize the base URL by removing trailing slashes.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
