//! Error types for the conversion service.
//!
//! Every variant's `Display` output is the exact caller-visible message;
//! the HTTP adapter returns these strings verbatim in the response body.

use crate::domain::UserId;
use crate::ports::RateError;

/// Pipeline-level errors: everything that can stop a conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("user id \"{0}\" is not allowed!")]
    UserNotAllowed(UserId),

    #[error("Invalid amount. amount must be a positive number")]
    InvalidAmount,

    #[error("{0} is not supported!")]
    UnsupportedCurrency(String),

    #[error(transparent)]
    Rate(#[from] RateError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Store-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl From<ConvertError> for AppError {
    fn from(err: ConvertError) -> Self {
        match err {
            // Database faults are ours, not the caller's.
            ConvertError::Store(e) => AppError::Internal(e.to_string()),
            e => AppError::BadRequest(e.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_public_contract() {
        assert_eq!(
            ConvertError::UserNotAllowed(UserId::new(0)).to_string(),
            r#"user id "0" is not allowed!"#
        );
        assert_eq!(
            ConvertError::InvalidAmount.to_string(),
            "Invalid amount. amount must be a positive number"
        );
        assert_eq!(
            ConvertError::UnsupportedCurrency("WTF".to_string()).to_string(),
            "WTF is not supported!"
        );
    }

    #[test]
    fn rate_errors_pass_through_transparently() {
        let err = ConvertError::from(RateError::Transport(500));
        assert!(err.to_string().contains("Status Code: 500"));
    }

    #[test]
    fn store_errors_map_to_internal() {
        let app: AppError = ConvertError::Store(StoreError::Database("disk full".into())).into();
        assert!(matches!(app, AppError::Internal(_)));
    }

    #[test]
    fn rejections_map_to_bad_request() {
        let app: AppError = ConvertError::InvalidAmount.into();
        assert!(matches!(app, AppError::BadRequest(_)));
    }
}
