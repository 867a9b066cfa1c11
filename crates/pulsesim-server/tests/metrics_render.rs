//! Prometheus exposition format of the full metric surface.
//!
//! Metric names, label schemas, and bucket layouts are an external contract;
//! these tests pin them.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use pulsesim_core::sampler::ScriptedSampler;
use pulsesim_server::obs::metrics::Metrics;
use pulsesim_server::services::{OperationSimulator, TransactionSimulator};

#[tokio::test(start_paused = true)]
async fn renders_every_family_with_exact_names() {
    let metrics = Arc::new(Metrics::new());
    let ops = OperationSimulator::new(Arc::clone(&metrics), Arc::new(ScriptedSampler::new()));
    let txs = TransactionSimulator::new(Arc::clone(&metrics), Arc::new(ScriptedSampler::new()));

    ops.simulate("fast").await;
    txs.simulate(1500.0, "premium").await;

    let body = metrics.render();

    assert!(body.contains("# TYPE example_requests_total counter"));
    assert!(body.contains("example_requests_total 1"));

    assert!(body.contains("# TYPE example_operations_total counter"));
    assert!(body.contains("example_operations_total{operation_type=\"fast\"} 1"));

    assert!(body.contains("# TYPE example_errors_total counter"));
    assert!(body.contains("example_errors_total 0"));

    assert!(body.contains("# TYPE example_transactions_total counter"));
    assert!(body.contains("example_transactions_total 1"));

    assert!(body.contains("# TYPE example_transactions_by_type_total counter"));
    assert!(body.contains("example_transactions_by_type_total{transaction_type=\"debit\"} 1"));

    // labels render in sorted key order: path before transaction_type
    assert!(body.contains("# TYPE example_transactions_by_path_total counter"));
    assert!(body.contains(
        "example_transactions_by_path_total{path=\"premium\",transaction_type=\"debit\"} 1"
    ));
}

#[tokio::test(start_paused = true)]
async fn operation_histogram_has_ten_linear_buckets() {
    let metrics = Arc::new(Metrics::new());
    let ops = OperationSimulator::new(Arc::clone(&metrics), Arc::new(ScriptedSampler::new()));
    ops.simulate("fast").await;

    let body = metrics.render();

    assert!(body.contains("# TYPE example_processing_seconds histogram"));
    for le in ["0.1", "0.2", "0.3", "0.4", "0.5", "0.6", "0.7", "0.8", "0.9", "1"] {
        assert!(
            body.contains(&format!("example_processing_seconds_bucket{{le=\"{le}\"}}")),
            "missing le={le}"
        );
    }
    assert!(!body.contains("example_processing_seconds_bucket{le=\"1.1\"}"));
    assert!(body.contains("example_processing_seconds_bucket{le=\"+Inf\"} 1"));
    assert!(body.contains("example_processing_seconds_count 1"));
    assert!(body.contains("example_processing_seconds_sum "));
}

#[tokio::test(start_paused = true)]
async fn transaction_histogram_has_fifteen_linear_buckets() {
    let metrics = Arc::new(Metrics::new());
    let txs = TransactionSimulator::new(Arc::clone(&metrics), Arc::new(ScriptedSampler::new()));
    txs.simulate(500.0, "premium").await;

    let body = metrics.render();

    assert!(body.contains("# TYPE example_transaction_processing_seconds histogram"));
    for le in [
        "0.1", "0.3", "0.5", "0.7", "0.9", "1.1", "1.3", "1.5", "1.7", "1.9", "2.1", "2.3",
        "2.5", "2.7", "2.9",
    ] {
        assert!(
            body.contains(&format!(
                "example_transaction_processing_seconds_bucket{{le=\"{le}\"}}"
            )),
            "missing le={le}"
        );
    }
    assert!(!body.contains("example_transaction_processing_seconds_bucket{le=\"3.1\"}"));
    assert!(body.contains("example_transaction_processing_seconds_bucket{le=\"+Inf\"} 1"));
    assert!(body.contains("example_transaction_processing_seconds_count 1"));
}

#[test]
fn untouched_registry_still_renders_label_less_families() {
    let metrics = Metrics::new();
    let body = metrics.render();

    // label-less counters and histograms render at zero; labeled families
    // render only their TYPE/HELP header until a label tuple appears
    assert!(body.contains("example_requests_total 0"));
    assert!(body.contains("example_errors_total 0"));
    assert!(body.contains("example_transactions_total 0"));
    assert!(body.contains("# TYPE example_operations_total counter"));
    assert!(body.contains("example_processing_seconds_count 0"));
    assert!(body.contains("example_transaction_processing_seconds_count 0"));
}
