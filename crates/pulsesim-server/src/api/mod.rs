//! JSON API handlers.
//!
//! The transport layer owns input validation (required fields, enumerated
//! allowed values); the simulators treat anything that gets through as
//! free-form. Simulated failures surface as 500 with the result record in
//! the body, never as a panic or an error type crossing the handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::app_state::AppState;

const OPERATION_TYPES: [&str; 2] = ["fast", "slow"];
const ACCOUNT_TYPES: [&str; 2] = ["premium", "standard"];

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    #[serde(default)]
    pub operation_type: String,
}

#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub account_type: String,
}

fn bad_request(msg: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
}

/// `POST /example/process`
pub async fn process_operation(
    State(state): State<AppState>,
    Json(req): Json<ProcessRequest>,
) -> Response {
    let operation_type = req.operation_type.trim();
    if operation_type.is_empty() {
        return bad_request("operation_type is required");
    }
    if !OPERATION_TYPES.contains(&operation_type.to_lowercase().as_str()) {
        return bad_request("operation_type must be one of: fast, slow");
    }

    tracing::info!(operation_type = %operation_type, "operation request received");

    let result = state.operations().simulate(operation_type).await;
    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(result)).into_response()
}

/// `POST /example/transaction`
pub async fn process_transaction(
    State(state): State<AppState>,
    Json(req): Json<TransactionRequest>,
) -> Response {
    // `!(> 0.0)` also rejects NaN
    if !(req.amount > 0.0) {
        return bad_request("amount must be greater than 0");
    }
    let account_type = req.account_type.trim();
    if account_type.is_empty() {
        return bad_request("account_type is required");
    }
    if !ACCOUNT_TYPES.contains(&account_type.to_lowercase().as_str()) {
        return bad_request("account_type must be one of: premium, standard");
    }

    tracing::info!(amount = req.amount, account_type = %account_type, "transaction request received");

    let result = state.transactions().simulate(req.amount, account_type).await;
    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(result)).into_response()
}

/// `GET /example/info`
pub async fn info() -> Response {
    Json(json!({
        "service": "pulsesim",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "demonstration service for latency simulation and Prometheus metrics",
        "endpoints": {
            "metrics": "/metrics",
            "process": "/example/process",
            "transaction": "/example/transaction",
            "health": "/healthz"
        },
        "supported_operation_types": OPERATION_TYPES,
        "supported_account_types": ACCOUNT_TYPES
    }))
    .into_response()
}
