//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use fx_types::{AppError, ConvertRequest, RateProvider, TransactionStore, UserId};

use crate::ConversionService;

/// Application state shared across handlers.
pub struct AppState<S: TransactionStore, P: RateProvider> {
    pub service: ConversionService<S, P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<fx_types::ConvertError> for ApiError {
    fn from(err: fx_types::ConvertError) -> Self {
        ApiError(err.into())
    }
}

impl From<fx_types::StoreError> for ApiError {
    fn from(err: fx_types::StoreError) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({ "message": message });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Convert an amount between two currencies and record the transaction.
///
/// Body extraction failures (broken JSON, wrong field types) surface as
/// 400 with the same `{"message": ...}` shape as every other rejection,
/// never as axum's default 422.
#[tracing::instrument(skip_all)]
pub async fn convert<S: TransactionStore, P: RateProvider>(
    State(state): State<Arc<AppState<S, P>>>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError(AppError::BadRequest(e.body_text())))?;
    let tx = state.service.convert(req).await?;
    Ok(Json(tx))
}

/// List a user's past conversions.
#[tracing::instrument(skip(state), fields(user_id = %id))]
pub async fn list_transactions<S: TransactionStore, P: RateProvider>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id: UserId = id
        .parse()
        .map_err(|_| ApiError(AppError::BadRequest("Invalid user ID".into())))?;

    let transactions = state.service.history(user_id).await?;
    Ok(Json(transactions))
}
