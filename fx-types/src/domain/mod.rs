//! Domain models for the conversion service.

pub mod transaction;
pub mod user;
pub mod validate;

pub use transaction::{NewTransaction, Transaction, TransactionId, utc_timestamp};
pub use user::UserId;
pub use validate::ConversionValidator;
