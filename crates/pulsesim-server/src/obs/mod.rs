//! Lightweight in-process metrics (dependency-free).
//!
//! Counters and histograms are stored as atomics, held by an explicitly
//! constructed [`metrics::Metrics`] registry injected into the simulators,
//! and rendered by the `/metrics` handler in Prometheus text format.

pub mod metrics;
