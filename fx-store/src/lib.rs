//! # FX Store
//!
//! Concrete store implementation (adapter) for the conversion service.
//! This crate provides the SQLite adapter implementing the
//! `TransactionStore` port.

pub mod sqlite;

mod types;

#[cfg(test)]
mod sqlite_tests;

pub use sqlite::SqliteStore;

/// Build and initialize a store from a database URL.
///
/// This function:
/// 1. Connects to the database (creating the file if needed)
/// 2. Runs the migration to create tables
/// 3. Returns a ready-to-use [`SqliteStore`]
///
/// # Examples
///
/// ```ignore
/// let store = build_store("sqlite://currency_conversion.db?mode=rwc").await?;
/// ```
pub async fn build_store(database_url: &str) -> anyhow::Result<SqliteStore> {
    SqliteStore::new(database_url).await
}
