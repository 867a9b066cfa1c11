//! Branching financial transaction simulator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use pulsesim_core::ids;
use pulsesim_core::model::{TransactionPath, TransactionResult, TransactionType};
use pulsesim_core::sampler::Sampler;

use crate::obs::metrics::Metrics;

/// Probability of the simulated transient failure.
const FAILURE_RATE: f64 = 0.03;

/// Premium accounts branch on amount; at or above this it is a debit.
const PREMIUM_DEBIT_THRESHOLD: f64 = 1000.0;

/// Standard accounts branch on a draw; below this it is a debit.
const STANDARD_DEBIT_SPLIT: f64 = 0.6;

const PREMIUM_DEBIT_WINDOW_MS: (u64, u64) = (100, 300);
const PREMIUM_CREDIT_WINDOW_MS: (u64, u64) = (50, 150);
const STANDARD_DEBIT_WINDOW_MS: (u64, u64) = (200, 500);
const STANDARD_CREDIT_WINDOW_MS: (u64, u64) = (150, 350);

/// Simulates a financial transaction classified by account tier and
/// movement kind.
pub struct TransactionSimulator {
    metrics: Arc<Metrics>,
    sampler: Arc<dyn Sampler>,
}

impl TransactionSimulator {
    pub fn new(metrics: Arc<Metrics>, sampler: Arc<dyn Sampler>) -> Self {
        Self { metrics, sampler }
    }

    /// Decide path, kind, and sampled delay.
    ///
    /// Draw order on the sampler: one `roll` for the standard split (premium
    /// draws none), then one delay draw for the chosen window.
    fn decide(&self, amount: f64, account_type: &str) -> (TransactionPath, TransactionType, u64) {
        let (path, kind, (lo_ms, hi_ms)) = if account_type.to_lowercase() == "premium" {
            if amount >= PREMIUM_DEBIT_THRESHOLD {
                (TransactionPath::Premium, TransactionType::Debit, PREMIUM_DEBIT_WINDOW_MS)
            } else {
                (TransactionPath::Premium, TransactionType::Credit, PREMIUM_CREDIT_WINDOW_MS)
            }
        } else if self.sampler.roll() < STANDARD_DEBIT_SPLIT {
            (TransactionPath::Standard, TransactionType::Debit, STANDARD_DEBIT_WINDOW_MS)
        } else {
            (TransactionPath::Standard, TransactionType::Credit, STANDARD_CREDIT_WINDOW_MS)
        };
        (path, kind, self.sampler.delay_between(lo_ms, hi_ms))
    }

    /// Run one simulated transaction.
    ///
    /// Never returns an error across the boundary. The total counter fires
    /// at entry; the type- and path-labeled counters fire once the branch is
    /// decided (before the delay), so they count the call even when it later
    /// fails. Exactly one wall-clock observation is recorded per call.
    pub async fn simulate(&self, amount: f64, account_type: &str) -> TransactionResult {
        let started = Instant::now();
        let transaction_id = ids::new_transaction_id();

        self.metrics.transactions_total.inc();

        tracing::info!(
            transaction_id = %transaction_id,
            amount,
            account_type = %account_type,
            "transaction start"
        );

        let (path, kind, delay_ms) = self.decide(amount, account_type);

        self.metrics
            .transactions_by_type
            .inc(&[("transaction_type", kind.as_str())]);
        self.metrics
            .transactions_by_path
            .inc(&[("path", path.as_str()), ("transaction_type", kind.as_str())]);

        tracing::info!(
            transaction_id = %transaction_id,
            path = %path.as_str(),
            transaction_type = %kind.as_str(),
            processing_time_ms = delay_ms,
            "transaction processing"
        );

        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let result = if self.sampler.roll() < FAILURE_RATE {
            self.metrics.errors_total.inc();
            tracing::error!(
                transaction_id = %transaction_id,
                path = %path.as_str(),
                transaction_type = %kind.as_str(),
                duration_ms = started.elapsed().as_millis() as u64,
                "transaction failed: simulated transient error"
            );
            TransactionResult::failed(
                transaction_id,
                amount,
                format!("simulated error in {} transaction of {:.2}", kind.as_str(), amount),
            )
        } else {
            tracing::info!(
                transaction_id = %transaction_id,
                path = %path.as_str(),
                transaction_type = %kind.as_str(),
                duration_ms = started.elapsed().as_millis() as u64,
                processing_time_ms = delay_ms,
                "transaction success"
            );
            TransactionResult::succeeded(
                transaction_id,
                amount,
                kind,
                path,
                delay_ms,
                format!(
                    "{} transaction of {:.2} processed on {} path",
                    kind.as_str(),
                    amount,
                    path.as_str()
                ),
            )
        };

        self.metrics.transaction_processing_seconds.observe(started.elapsed());
        result
    }
}
