//! Transaction domain model.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Unique identifier for a Transaction.
///
/// Assigned by the store on append (autoincrement), monotonically
/// increasing. Never minted by the application itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded currency conversion.
///
/// Transactions are immutable once created - they represent a historical
/// record of what happened. The wire shape of this struct IS the public
/// response body of `POST /convert` and the element shape of
/// `GET /transactions/{user_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Transaction {
    /// Store-assigned unique identifier
    pub transaction_id: TransactionId,
    /// Who requested the conversion
    pub user_id: UserId,
    /// 3-letter source currency code
    #[schema(example = "EUR")]
    pub source_currency: String,
    /// Amount in source currency
    #[schema(example = 100.0)]
    pub amount: f64,
    /// 3-letter target currency code
    #[schema(example = "USD")]
    pub target_currency: String,
    /// amount * exchange_rate
    #[schema(example = 140.0)]
    pub converted_amount: f64,
    /// Rate applied at conversion time
    #[schema(example = 1.4)]
    pub exchange_rate: f64,
    /// Creation instant, UTC, second resolution, trailing `Z`
    #[schema(example = "2023-07-24T19:30:00Z")]
    pub timestamp: String,
}

impl Transaction {
    /// Reassembles a transaction from a store-assigned id and the record
    /// that was appended.
    pub fn from_record(id: TransactionId, record: NewTransaction) -> Self {
        Self {
            transaction_id: id,
            user_id: record.user_id,
            source_currency: record.source_currency,
            amount: record.amount,
            target_currency: record.target_currency,
            converted_amount: record.converted_amount,
            exchange_rate: record.exchange_rate,
            timestamp: record.timestamp,
        }
    }
}

/// A conversion record before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub user_id: UserId,
    pub source_currency: String,
    pub amount: f64,
    pub target_currency: String,
    pub converted_amount: f64,
    pub exchange_rate: f64,
    pub timestamp: String,
}

/// Current instant formatted the way transactions carry it:
/// UTC, second resolution, ISO-8601 with a literal trailing `Z`.
pub fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_second_resolution_utc() {
        let ts = utc_timestamp();
        // e.g. 2023-07-24T19:30:00Z
        assert_eq!(ts.len(), 20);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
        assert!(!ts.contains('.'), "no sub-second part: {ts}");
    }

    #[test]
    fn from_record_preserves_every_field() {
        let record = NewTransaction {
            user_id: UserId::new(1),
            source_currency: "EUR".to_string(),
            amount: 100.0,
            target_currency: "USD".to_string(),
            converted_amount: 140.0,
            exchange_rate: 1.4,
            timestamp: "2023-07-24T19:30:00Z".to_string(),
        };

        let tx = Transaction::from_record(TransactionId::new(7), record.clone());

        assert_eq!(tx.transaction_id, TransactionId::new(7));
        assert_eq!(tx.user_id, record.user_id);
        assert_eq!(tx.source_currency, record.source_currency);
        assert_eq!(tx.amount, record.amount);
        assert_eq!(tx.target_currency, record.target_currency);
        assert_eq!(tx.converted_amount, record.converted_amount);
        assert_eq!(tx.exchange_rate, record.exchange_rate);
        assert_eq!(tx.timestamp, record.timestamp);
    }

    #[test]
    fn transaction_serializes_with_wire_field_names() {
        let tx = Transaction::from_record(
            TransactionId::new(123),
            NewTransaction {
                user_id: UserId::new(1),
                source_currency: "EUR".to_string(),
                amount: 100.0,
                target_currency: "USD".to_string(),
                converted_amount: 140.0,
                exchange_rate: 1.4,
                timestamp: "2023-07-24T19:30:00Z".to_string(),
            },
        );

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["transaction_id"], 123);
        assert_eq!(json["user_id"], 1);
        assert_eq!(json["converted_amount"], 140.0);
        assert_eq!(json["timestamp"], "2023-07-24T19:30:00Z");
    }
}
