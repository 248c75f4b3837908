//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod rate;
mod store;

pub use rate::{RateError, RateProvider};
pub use store::TransactionStore;
