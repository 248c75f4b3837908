//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use fx_types::domain::{TransactionId, UserId};
use fx_types::dto::{ConvertRequest, ErrorBody};
use fx_types::Transaction;
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Convert an amount between two currencies
#[utoipa::path(
    post,
    path = "/convert",
    tag = "conversions",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Conversion recorded", body = Transaction),
        (status = 400, description = "Rejected request or rate acquisition failure", body = ErrorBody)
    )
)]
async fn convert() {}

/// List a user's past conversions
#[utoipa::path(
    get,
    path = "/transactions/{user_id}",
    tag = "conversions",
    params(
        ("user_id" = i64, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "Transactions in store order, possibly empty", body = Vec<Transaction>),
        (status = 400, description = "Malformed user id", body = ErrorBody)
    )
)]
async fn list_transactions() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FX Conversion API",
        description = "Currency conversion with durable transaction history",
        version = "0.1.0",
    ),
    paths(health, convert, list_transactions),
    components(schemas(ConvertRequest, ErrorBody, Transaction, TransactionId, UserId)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "conversions", description = "Currency conversion and history"),
    )
)]
pub struct ApiDoc;
