//! Metrics registry for the simulator service.
//!
//! No metrics crate is used; this module provides counter and histogram
//! types backed by atomics, with dynamic labels backed by `DashMap`. Labels
//! are flattened into sorted key vectors to keep deterministic ordering.
//! Histogram bucket bounds are held in integer milliseconds and rendered as
//! seconds, so `le` values print exactly (`0.1`, `0.3`, ... `2.9`).

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Label-less monotonic counter.
#[derive(Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    /// Increment by 1.
    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value.
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);
        let _ = writeln!(out, "{} {}", name, self.get());
    }
}

/// Labeled monotonic counter family.
#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(Self::key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for a label tuple (0 if never incremented).
    pub fn value(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&Self::key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();
        key
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);
        for r in self.map.iter() {
            let key = r.key();
            let val = r.value().load(Ordering::Relaxed);
            let label_str = key
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

/// Label-less histogram with fixed bucket bounds.
///
/// Buckets are cumulative: an observation increments every bucket whose
/// bound is at or above the observed value, matching the Prometheus `le`
/// contract. The sum is accumulated in integer microseconds.
pub struct Histogram {
    bounds_ms: Vec<u64>,
    buckets: Vec<AtomicU64>,
    sum_micros: AtomicU64,
    count: AtomicU64,
}

impl Histogram {
    /// Linear bucket layout: `count` bounds starting at `start_ms`, spaced
    /// `width_ms` apart.
    pub fn linear(start_ms: u64, width_ms: u64, count: usize) -> Self {
        let bounds_ms: Vec<u64> = (0..count as u64).map(|i| start_ms + width_ms * i).collect();
        let buckets = bounds_ms.iter().map(|_| AtomicU64::new(0)).collect();
        Self {
            bounds_ms,
            buckets,
            sum_micros: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Observe an elapsed duration.
    pub fn observe(&self, elapsed: Duration) {
        let micros = elapsed.as_micros() as u64;
        self.count.fetch_add(1, Ordering::Relaxed);
        self.sum_micros.fetch_add(micros, Ordering::Relaxed);
        for (i, &bound_ms) in self.bounds_ms.iter().enumerate() {
            if micros <= bound_ms * 1_000 {
                self.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Number of observations recorded so far.
    pub fn sample_count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Render in Prometheus text exposition format (le values in seconds).
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} histogram", name);
        for (i, &bound_ms) in self.bounds_ms.iter().enumerate() {
            let le = bound_ms as f64 / 1_000.0;
            let count = self.buckets[i].load(Ordering::Relaxed);
            let _ = writeln!(out, "{}_bucket{{le=\"{}\"}} {}", name, le, count);
        }
        let count = self.count.load(Ordering::Relaxed);
        let _ = writeln!(out, "{}_bucket{{le=\"+Inf\"}} {}", name, count);

        let sum = self.sum_micros.load(Ordering::Relaxed) as f64 / 1_000_000.0;
        let _ = writeln!(out, "{}_sum {}", name, sum);
        let _ = writeln!(out, "{}_count {}", name, count);
    }
}

/// The full metric surface of the service.
///
/// Constructed once per process, held by the app state, and injected into
/// both simulators. Metric names and label schemas are part of the external
/// contract and must not change.
pub struct Metrics {
    /// `example_requests_total`
    pub requests_total: Counter,
    /// `example_operations_total{operation_type}`
    pub operations_total: CounterVec,
    /// `example_processing_seconds`
    pub processing_seconds: Histogram,
    /// `example_errors_total`
    pub errors_total: Counter,
    /// `example_transactions_total`
    pub transactions_total: Counter,
    /// `example_transactions_by_type_total{transaction_type}`
    pub transactions_by_type: CounterVec,
    /// `example_transactions_by_path_total{path, transaction_type}`
    pub transactions_by_path: CounterVec,
    /// `example_transaction_processing_seconds`
    pub transaction_processing_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            requests_total: Counter::default(),
            operations_total: CounterVec::default(),
            // 0.1s to 1.0s, 10 linear buckets
            processing_seconds: Histogram::linear(100, 100, 10),
            errors_total: Counter::default(),
            transactions_total: Counter::default(),
            transactions_by_type: CounterVec::default(),
            transactions_by_path: CounterVec::default(),
            // 0.1s to 2.9s, 15 linear buckets
            transaction_processing_seconds: Histogram::linear(100, 200, 15),
        }
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.requests_total
            .render("example_requests_total", "Total requests processed", &mut out);
        self.operations_total.render(
            "example_operations_total",
            "Total operations by type",
            &mut out,
        );
        self.processing_seconds.render(
            "example_processing_seconds",
            "Request processing time in seconds",
            &mut out,
        );
        self.errors_total
            .render("example_errors_total", "Total errors raised", &mut out);
        self.transactions_total.render(
            "example_transactions_total",
            "Total transactions processed",
            &mut out,
        );
        self.transactions_by_type.render(
            "example_transactions_by_type_total",
            "Total transactions by type",
            &mut out,
        );
        self.transactions_by_path.render(
            "example_transactions_by_path_total",
            "Total transactions by decision path",
            &mut out,
        );
        self.transaction_processing_seconds.render(
            "example_transaction_processing_seconds",
            "Transaction processing time in seconds",
            &mut out,
        );
        out
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_vec_separates_label_tuples() {
        let c = CounterVec::default();
        c.inc(&[("operation_type", "fast")]);
        c.inc(&[("operation_type", "fast")]);
        c.inc(&[("operation_type", "slow")]);
        assert_eq!(c.value(&[("operation_type", "fast")]), 2);
        assert_eq!(c.value(&[("operation_type", "slow")]), 1);
        assert_eq!(c.value(&[("operation_type", "other")]), 0);
    }

    #[test]
    fn counter_vec_key_order_is_insensitive() {
        let c = CounterVec::default();
        c.inc(&[("path", "premium"), ("transaction_type", "debit")]);
        assert_eq!(c.value(&[("transaction_type", "debit"), ("path", "premium")]), 1);
    }

    #[test]
    fn histogram_buckets_are_cumulative() {
        let h = Histogram::linear(100, 100, 10);
        h.observe(Duration::from_millis(150));
        let rendered = {
            let mut out = String::new();
            h.render("t", "t", &mut out);
            out
        };
        // 150ms falls above the 0.1 bound and inside every later one
        assert!(rendered.contains("t_bucket{le=\"0.1\"} 0"));
        assert!(rendered.contains("t_bucket{le=\"0.2\"} 1"));
        assert!(rendered.contains("t_bucket{le=\"1\"} 1"));
        assert!(rendered.contains("t_bucket{le=\"+Inf\"} 1"));
        assert!(rendered.contains("t_count 1"));
        assert_eq!(h.sample_count(), 1);
    }

    #[test]
    fn linear_bounds_match_contract() {
        let h = Histogram::linear(100, 200, 15);
        assert_eq!(h.bounds_ms.first(), Some(&100));
        assert_eq!(h.bounds_ms.last(), Some(&2900));
        assert_eq!(h.bounds_ms.len(), 15);
    }

    #[test]
    fn label_values_are_escaped() {
        let c = CounterVec::default();
        c.inc(&[("operation_type", "we\"ird")]);
        let mut out = String::new();
        c.render("t", "t", &mut out);
        assert!(out.contains("operation_type=\"we\\\"ird\""));
    }
}
