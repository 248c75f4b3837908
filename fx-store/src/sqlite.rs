//! SQLite store adapter.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use fx_types::{NewTransaction, StoreError, Transaction, TransactionId, TransactionStore, UserId};

use crate::types::DbTransaction;

/// SQLite implementation of the `TransactionStore` port.
///
/// Transaction ids come straight from SQLite's AUTOINCREMENT rowid, so
/// uniqueness and monotonicity are the database's guarantee, not ours.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a new SQLite store with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // An in-memory database exists per connection; pin the pool to one
        // connection so every query sees the same schema and data.
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePool::connect_with(options).await?
        };

        // Run migration from migration file
        let ddl = include_str!("../migrations/0001_create_transactions.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TransactionStore for SqliteStore {
    #[tracing::instrument(skip(self, record), fields(user_id = %record.user_id))]
    async fn append(&self, record: NewTransaction) -> Result<TransactionId, StoreError> {
        let result = sqlx::query(
            r#"INSERT INTO transactions
               (user_id, source_currency, amount, target_currency, converted_amount, exchange_rate, timestamp)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(record.user_id.as_i64())
        .bind(&record.source_currency)
        .bind(record.amount)
        .bind(&record.target_currency)
        .bind(record.converted_amount)
        .bind(record.exchange_rate)
        .bind(&record.timestamp)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(TransactionId::new(result.last_insert_rowid()))
    }

    #[tracing::instrument(skip(self))]
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>, StoreError> {
        let rows: Vec<DbTransaction> = sqlx::query_as(
            r#"SELECT id, user_id, source_currency, amount, target_currency,
                      converted_amount, exchange_rate, timestamp
               FROM transactions WHERE user_id = ? ORDER BY id"#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Transaction::from).collect())
    }
}
