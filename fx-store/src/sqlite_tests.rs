//! SQLite store integration tests.

#[cfg(test)]
mod tests {
    use fx_types::{NewTransaction, TransactionStore, UserId};

    use crate::SqliteStore;

    async fn setup_store() -> SqliteStore {
        SqliteStore::new("sqlite::memory:").await.unwrap()
    }

    fn record(user_id: i64, amount: f64, rate: f64) -> NewTransaction {
        NewTransaction {
            user_id: UserId::new(user_id),
            source_currency: "EUR".to_string(),
            amount,
            target_currency: "USD".to_string(),
            converted_amount: amount * rate,
            exchange_rate: rate,
            timestamp: "2023-07-24T19:30:00Z".to_string(),
        }
    }

    #[tokio::test]
    async fn append_assigns_increasing_ids() {
        let store = setup_store().await;

        let first = store.append(record(1, 100.0, 1.4)).await.unwrap();
        let second = store.append(record(1, 50.0, 1.4)).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn round_trip_returns_the_record_unchanged() {
        let store = setup_store().await;

        let rec = record(1, 100.0, 1.4);
        let id = store.append(rec.clone()).await.unwrap();

        let listed = store.list_by_user(UserId::new(1)).await.unwrap();
        assert_eq!(listed.len(), 1);

        let tx = &listed[0];
        assert_eq!(tx.transaction_id, id);
        assert_eq!(tx.user_id, rec.user_id);
        assert_eq!(tx.source_currency, rec.source_currency);
        assert_eq!(tx.amount, rec.amount);
        assert_eq!(tx.target_currency, rec.target_currency);
        assert_eq!(tx.converted_amount, rec.converted_amount);
        assert_eq!(tx.exchange_rate, rec.exchange_rate);
        assert_eq!(tx.timestamp, rec.timestamp);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = setup_store().await;

        store.append(record(1, 10.0, 1.4)).await.unwrap();
        store.append(record(1, 20.0, 1.4)).await.unwrap();
        store.append(record(1, 30.0, 1.4)).await.unwrap();

        let listed = store.list_by_user(UserId::new(1)).await.unwrap();
        let amounts: Vec<f64> = listed.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![10.0, 20.0, 30.0]);
    }

    #[tokio::test]
    async fn list_filters_by_user() {
        let store = setup_store().await;

        store.append(record(1, 10.0, 1.4)).await.unwrap();
        store.append(record(2, 20.0, 1.4)).await.unwrap();
        store.append(record(1, 30.0, 1.4)).await.unwrap();

        let listed = store.list_by_user(UserId::new(1)).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|t| t.user_id == UserId::new(1)));
    }

    #[tokio::test]
    async fn unknown_user_yields_an_empty_list() {
        let store = setup_store().await;

        let listed = store.list_by_user(UserId::new(42)).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn identical_records_stay_distinct() {
        let store = setup_store().await;

        let rec = record(1, 100.0, 1.4);
        let a = store.append(rec.clone()).await.unwrap();
        let b = store.append(rec).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(store.list_by_user(UserId::new(1)).await.unwrap().len(), 2);
    }
}
