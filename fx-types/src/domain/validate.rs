//! Request validation.
//!
//! Runs before any external call is made. The check order is part of the
//! contract: caller identity, then amount, then source currency, then
//! target currency - the first failure wins and determines the message.

use std::collections::HashSet;

use crate::dto::ConvertRequest;
use crate::error::ConvertError;

use super::user::UserId;

/// Validates conversion requests against process-wide static configuration.
///
/// Both sets are built once at startup and injected here; the validator
/// never mutates them and has no other state.
#[derive(Debug, Clone)]
pub struct ConversionValidator {
    allowed_users: HashSet<UserId>,
    /// `None` when a live rate provider is in use: the provider itself is
    /// the authority on which currencies exist, so the local set check is
    /// skipped.
    supported_currencies: Option<HashSet<String>>,
}

impl ConversionValidator {
    pub fn new(
        allowed_users: HashSet<UserId>,
        supported_currencies: Option<HashSet<String>>,
    ) -> Self {
        Self {
            allowed_users,
            supported_currencies,
        }
    }

    /// Checks the request, short-circuiting on the first failure.
    pub fn validate(&self, req: &ConvertRequest) -> Result<(), ConvertError> {
        if !self.allowed_users.contains(&req.user_id) {
            return Err(ConvertError::UserNotAllowed(req.user_id));
        }

        if !req.amount.is_finite() || req.amount <= 0.0 {
            return Err(ConvertError::InvalidAmount);
        }

        if let Some(supported) = &self.supported_currencies {
            if !supported.contains(&req.source_currency) {
                return Err(ConvertError::UnsupportedCurrency(
                    req.source_currency.clone(),
                ));
            }

            if !supported.contains(&req.target_currency) {
                return Err(ConvertError::UnsupportedCurrency(
                    req.target_currency.clone(),
                ));
            }
        }

        Ok(())
    }
}
