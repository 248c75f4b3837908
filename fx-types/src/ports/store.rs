//! Transaction store port.
//!
//! This is the primary outbound port: durable append plus query-by-owner.
//! Adapters (SQLite, in-memory) implement this trait.

use crate::domain::{NewTransaction, Transaction, TransactionId, UserId};
use crate::error::StoreError;

/// Durable storage for completed conversions.
///
/// `append` MUST be a single atomic insert: the id it returns is unique
/// and assigned by the store itself, and the record is durable before the
/// call returns.
#[async_trait::async_trait]
pub trait TransactionStore: Send + Sync + 'static {
    /// Persists one conversion record and returns its store-assigned id.
    async fn append(&self, record: NewTransaction) -> Result<TransactionId, StoreError>;

    /// Lists every transaction for a user, in the store's own order
    /// (insertion order). Unknown users simply yield an empty list.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>, StoreError>;
}

/// Arc-wrapped stores delegate, so callers can share one instance.
#[async_trait::async_trait]
impl<T: TransactionStore> TransactionStore for std::sync::Arc<T> {
    async fn append(&self, record: NewTransaction) -> Result<TransactionId, StoreError> {
        (**self).append(record).await
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>, StoreError> {
        (**self).list_by_user(user_id).await
    }
}
