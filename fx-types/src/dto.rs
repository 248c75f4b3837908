//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::UserId;

/// Body of `POST /convert`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertRequest {
    /// Who is requesting the conversion
    #[schema(example = 1)]
    pub user_id: UserId,
    /// 3-letter source currency code
    #[schema(example = "EUR")]
    pub source_currency: String,
    /// 3-letter target currency code
    #[schema(example = "USD")]
    pub target_currency: String,
    /// Amount to convert, in source currency
    #[schema(value_type = f64, example = 100.0)]
    #[serde(deserialize_with = "lenient_amount", default = "missing_amount")]
    pub amount: f64,
}

/// Accepts any JSON value for `amount`, mapping non-numbers to NaN.
///
/// The validator owns the "must be a positive number" rejection, and the
/// caller-identity check runs before it; failing numeric parsing here
/// would answer with a deserialization fault and the wrong check order.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(f64::NAN))
}

fn missing_amount() -> f64 {
    f64::NAN
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description
    #[schema(example = "WTF is not supported!")]
    pub message: String,
}
