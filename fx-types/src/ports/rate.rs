//! Exchange rate provider port.
//!
//! Implementations can be HTTP clients against a live rate service or a
//! fixed-rate stand-in; the pipeline only sees this trait.

/// Everything that can go wrong while acquiring a rate.
///
/// A closed set so the pipeline maps each failure to a stable
/// client-facing message; `Display` IS that message.
#[derive(Debug, thiserror::Error)]
pub enum RateError {
    /// The account tier only quotes rates against one base currency and
    /// the requested source is a different one. Raised before any
    /// network traffic.
    #[error("free API supports only {0} as base currency")]
    UnsupportedBase(String),

    /// HTTP 200 but the provider flagged the request as failed; carries
    /// the provider's error payload verbatim.
    #[error("{0}")]
    Provider(serde_json::Value),

    /// Provider answered successfully but the target currency was not in
    /// the rate map.
    #[error("exchange rate for {0} not available in the external API response")]
    RateUnavailable(String),

    /// Non-200 transport status.
    #[error("external API request failed with Status Code: {0}")]
    Transport(u16),

    /// Anything else (connect failure, malformed body). Surfaced with a
    /// fixed message so internals never leak to callers.
    #[error("failure getting exchange rate on the external API")]
    Unexpected(String),
}

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Get the multiplicative factor converting one unit of `source`
    /// currency into `target` currency. Returned unmodified - no rounding.
    async fn get_rate(&self, source: &str, target: &str) -> Result<f64, RateError>;
}

/// Arc-wrapped providers delegate, so callers can share one instance.
#[async_trait::async_trait]
impl<T: RateProvider> RateProvider for std::sync::Arc<T> {
    async fn get_rate(&self, source: &str, target: &str) -> Result<f64, RateError> {
        (**self).get_rate(source, target).await
    }
}
