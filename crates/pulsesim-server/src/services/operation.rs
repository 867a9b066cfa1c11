//! Generic fast/slow operation simulator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use pulsesim_core::ids;
use pulsesim_core::model::OperationResult;
use pulsesim_core::sampler::Sampler;

use crate::obs::metrics::Metrics;

/// Probability of the simulated transient failure.
const FAILURE_RATE: f64 = 0.05;

const FAST_WINDOW_MS: (u64, u64) = (50, 200);
const SLOW_WINDOW_MS: (u64, u64) = (500, 1500);
const DEFAULT_WINDOW_MS: (u64, u64) = (100, 300);

/// Simulates a variable-latency unit of work classified as fast/slow/other.
pub struct OperationSimulator {
    metrics: Arc<Metrics>,
    sampler: Arc<dyn Sampler>,
}

impl OperationSimulator {
    pub fn new(metrics: Arc<Metrics>, sampler: Arc<dyn Sampler>) -> Self {
        Self { metrics, sampler }
    }

    /// Delay window for an operation type, normalized case-insensitively.
    /// Unrecognized values are not errors; they use the default window.
    fn window_for(operation_type: &str) -> (u64, u64) {
        match operation_type.to_lowercase().as_str() {
            "fast" => FAST_WINDOW_MS,
            "slow" => SLOW_WINDOW_MS,
            _ => DEFAULT_WINDOW_MS,
        }
    }

    /// Run one simulated operation.
    ///
    /// Never returns an error: the simulated transient failure is converted
    /// into a `success = false` result at this layer. Every call increments
    /// the request and per-type counters and records exactly one wall-clock
    /// observation, regardless of outcome.
    pub async fn simulate(&self, operation_type: &str) -> OperationResult {
        let started = Instant::now();
        let operation_id = ids::new_operation_id();
        let account_number = ids::synthetic_account_number();
        let amount = ids::synthetic_amount();

        self.metrics.requests_total.inc();
        self.metrics
            .operations_total
            .inc(&[("operation_type", operation_type)]);

        tracing::info!(
            operation_id = %operation_id,
            operation_type = %operation_type,
            account_number,
            amount,
            "operation start"
        );

        let (lo_ms, hi_ms) = Self::window_for(operation_type);
        let delay_ms = self.sampler.delay_between(lo_ms, hi_ms);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let result = if self.sampler.roll() < FAILURE_RATE {
            self.metrics.errors_total.inc();
            tracing::error!(
                operation_id = %operation_id,
                operation_type = %operation_type,
                duration_ms = started.elapsed().as_millis() as u64,
                "operation failed: simulated transient error"
            );
            OperationResult::failed(format!(
                "simulated error during {operation_type} operation"
            ))
        } else {
            tracing::info!(
                operation_id = %operation_id,
                operation_type = %operation_type,
                duration_ms = started.elapsed().as_millis() as u64,
                processing_time_ms = delay_ms,
                "operation success"
            );
            OperationResult::succeeded(
                format!("{operation_type} operation completed successfully"),
                delay_ms,
            )
        };

        self.metrics.processing_seconds.observe(started.elapsed());
        result
    }
}
