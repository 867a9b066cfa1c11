//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/example/process", post(api::process_operation))
        .route("/example/transaction", post(api::process_transaction))
        .route("/example/info", get(api::info))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
