//! Shared application state for the PulseSim server.
//!
//! Holds the config, the metrics registry, and the two simulators. The
//! registry is constructed here and injected into the simulators so no
//! process-wide mutable statics exist; tests build the same state with a
//! scripted sampler.

use std::sync::Arc;

use pulsesim_core::sampler::{Sampler, ThreadSampler};

use crate::config::ServiceConfig;
use crate::obs::metrics::Metrics;
use crate::services::{OperationSimulator, TransactionSimulator};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    metrics: Arc<Metrics>,
    operations: OperationSimulator,
    transactions: TransactionSimulator,
}

impl AppState {
    /// Build application state with the production sampler.
    pub fn new(cfg: ServiceConfig) -> Self {
        Self::with_sampler(cfg, Arc::new(ThreadSampler))
    }

    /// Build application state with an injected sampler.
    pub fn with_sampler(cfg: ServiceConfig, sampler: Arc<dyn Sampler>) -> Self {
        let metrics = Arc::new(Metrics::new());
        let operations = OperationSimulator::new(Arc::clone(&metrics), Arc::clone(&sampler));
        let transactions = TransactionSimulator::new(Arc::clone(&metrics), sampler);

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics,
                operations,
                transactions,
            }),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &Metrics {
        &self.inner.metrics
    }

    pub fn operations(&self) -> &OperationSimulator {
        &self.inner.operations
    }

    pub fn transactions(&self) -> &TransactionSimulator {
        &self.inner.transactions
    }
}
