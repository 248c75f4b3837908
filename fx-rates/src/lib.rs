//! # FX Rates
//!
//! Rate-provider adapters implementing the `RateProvider` port:
//!
//! - [`FixedRateProvider`] - a configured constant rate, for development
//!   and deployments without an external rate account.
//! - [`LiveRateProvider`] - one HTTP request per conversion against an
//!   exchangeratesapi.io-style service. No retry, no caching: every
//!   conversion re-fetches.
//!
//! [`RateSource`] wraps the two so the strategy is picked once at
//! startup and the rest of the system only sees the port trait.

use std::collections::HashMap;

use serde::Deserialize;

use fx_types::{RateError, RateProvider};

// ─────────────────────────────────────────────────────────────────────────────
// Fixed strategy
// ─────────────────────────────────────────────────────────────────────────────

/// Returns the same configured rate for every currency pair.
///
/// Currency-support checks are the validator's job in this mode; this
/// provider never rejects.
#[derive(Debug, Clone, Copy)]
pub struct FixedRateProvider {
    rate: f64,
}

impl FixedRateProvider {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

#[async_trait::async_trait]
impl RateProvider for FixedRateProvider {
    async fn get_rate(&self, _source: &str, _target: &str) -> Result<f64, RateError> {
        Ok(self.rate)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Live strategy
// ─────────────────────────────────────────────────────────────────────────────

/// Wire shape of the external rate service's response.
///
/// `{"success": true, "rates": {"USD": 1.4, ...}}` on success,
/// `{"success": false, "error": {...}}` on provider-reported failure.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    success: bool,
    #[serde(default)]
    rates: HashMap<String, f64>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// Fetches rates from an external HTTP service.
///
/// The free account tier only quotes rates against a single base
/// currency; requests for any other source fail before touching the
/// network.
pub struct LiveRateProvider {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
    base_currency: String,
}

impl LiveRateProvider {
    pub fn new(base_url: String, access_key: String, base_currency: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            access_key,
            base_currency,
        }
    }
}

#[async_trait::async_trait]
impl RateProvider for LiveRateProvider {
    #[tracing::instrument(skip(self), fields(source = %source, target = %target))]
    async fn get_rate(&self, source: &str, target: &str) -> Result<f64, RateError> {
        if source != self.base_currency {
            return Err(RateError::UnsupportedBase(self.base_currency.clone()));
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("base", source), ("access_key", self.access_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "rate request failed to complete");
                RateError::Unexpected(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Transport(status.as_u16()));
        }

        let body: RatesResponse = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "rate response body was not the expected shape");
            RateError::Unexpected(e.to_string())
        })?;

        if !body.success {
            return Err(RateError::Provider(
                body.error.unwrap_or(serde_json::Value::Null),
            ));
        }

        body.rates
            .get(target)
            .copied()
            .ok_or_else(|| RateError::RateUnavailable(target.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime strategy selection
// ─────────────────────────────────────────────────────────────────────────────

/// The rate-acquisition strategy, fixed at construction time.
pub enum RateSource {
    Fixed(FixedRateProvider),
    Live(LiveRateProvider),
}

impl RateSource {
    pub fn fixed(rate: f64) -> Self {
        Self::Fixed(FixedRateProvider::new(rate))
    }

    pub fn live(base_url: String, access_key: String, base_currency: String) -> Self {
        Self::Live(LiveRateProvider::new(base_url, access_key, base_currency))
    }
}

#[async_trait::async_trait]
impl RateProvider for RateSource {
    async fn get_rate(&self, source: &str, target: &str) -> Result<f64, RateError> {
        match self {
            RateSource::Fixed(p) => p.get_rate(source, target).await,
            RateSource::Live(p) => p.get_rate(source, target).await,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
