//! Conversion application service.
//!
//! Orchestrates validation, rate acquisition, arithmetic, and persistence
//! through the port traits. Contains NO infrastructure logic.

use fx_types::{
    ConversionValidator, ConvertError, ConvertRequest, NewTransaction, RateProvider, StoreError,
    Transaction, TransactionStore, UserId, utc_timestamp,
};

/// Application service for currency conversions.
///
/// Generic over `S: TransactionStore` and `P: RateProvider` - both
/// adapters are injected at construction time. This enables:
/// - Swapping the store or the rate strategy without code changes
/// - Testing with in-memory mocks
/// - Compile-time checks for port implementation
pub struct ConversionService<S: TransactionStore, P: RateProvider> {
    store: S,
    provider: P,
    validator: ConversionValidator,
}

impl<S: TransactionStore, P: RateProvider> ConversionService<S, P> {
    pub fn new(store: S, provider: P, validator: ConversionValidator) -> Self {
        Self {
            store,
            provider,
            validator,
        }
    }

    /// Runs the whole conversion pipeline for one request.
    ///
    /// Validation rejections and rate failures return before anything is
    /// written: there is exactly one store append on full success and
    /// none otherwise. Resubmitting an identical request creates a new,
    /// distinct transaction - conversions are deliberately not idempotent.
    #[tracing::instrument(
        skip(self, req),
        fields(user_id = %req.user_id, source = %req.source_currency, target = %req.target_currency)
    )]
    pub async fn convert(&self, req: ConvertRequest) -> Result<Transaction, ConvertError> {
        self.validator.validate(&req)?;

        let rate = self
            .provider
            .get_rate(&req.source_currency, &req.target_currency)
            .await?;

        let converted_amount = req.amount * rate;
        let record = NewTransaction {
            user_id: req.user_id,
            source_currency: req.source_currency,
            amount: req.amount,
            target_currency: req.target_currency,
            converted_amount,
            exchange_rate: rate,
            timestamp: utc_timestamp(),
        };

        let id = self.store.append(record.clone()).await?;
        tracing::info!(transaction_id = %id, "conversion recorded");

        Ok(Transaction::from_record(id, record))
    }

    /// Lists a user's past conversions, in store order.
    ///
    /// Deliberately skips the allowed-user check: any id is accepted and
    /// an unknown one simply has no history.
    #[tracing::instrument(skip(self))]
    pub async fn history(&self, user_id: UserId) -> Result<Vec<Transaction>, StoreError> {
        self.store.list_by_user(user_id).await
    }
}
