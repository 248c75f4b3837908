//! Database row types.
//!
//! Plain `FromRow` structs mirroring the `transactions` table; mapping to
//! domain types happens at the adapter boundary, never in queries.

use sqlx::FromRow;

use fx_types::{Transaction, TransactionId, UserId};

/// One row of the `transactions` table.
#[derive(Debug, FromRow)]
pub(crate) struct DbTransaction {
    pub id: i64,
    pub user_id: i64,
    pub source_currency: String,
    pub amount: f64,
    pub target_currency: String,
    pub converted_amount: f64,
    pub exchange_rate: f64,
    pub timestamp: String,
}

impl From<DbTransaction> for Transaction {
    fn from(row: DbTransaction) -> Self {
        Transaction {
            transaction_id: TransactionId::new(row.id),
            user_id: UserId::new(row.user_id),
            source_currency: row.source_currency,
            amount: row.amount,
            target_currency: row.target_currency,
            converted_amount: row.converted_amount,
            exchange_rate: row.exchange_rate,
            timestamp: row.timestamp,
        }
    }
}
