//! Result records returned by the simulators.
//!
//! Both records are created once per call, immutable after construction,
//! and never persisted. Failures are in-band: `success = false` plus a
//! descriptive message, never an `Err` across the simulator boundary.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Movement kind of a simulated transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Debit,
    Credit,
    /// Only appears on the failure branch, where no kind was settled.
    Unknown,
}

impl TransactionType {
    /// Label value used in metrics and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Debit => "debit",
            TransactionType::Credit => "credit",
            TransactionType::Unknown => "unknown",
        }
    }
}

/// Decision branch taken for a simulated transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionPath {
    Premium,
    Standard,
    /// Only appears on the failure branch.
    Error,
}

impl TransactionPath {
    /// Label value used in metrics and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionPath::Premium => "premium",
            TransactionPath::Standard => "standard",
            TransactionPath::Error => "error",
        }
    }
}

/// Outcome of one simulated operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
    /// Sampled delay on success, `0` on failure.
    pub processing_time_ms: u64,
    pub timestamp: DateTime<Utc>,
}

impl OperationResult {
    pub fn succeeded(message: String, processing_time_ms: u64) -> Self {
        Self {
            success: true,
            message,
            processing_time_ms,
            timestamp: Utc::now(),
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
            processing_time_ms: 0,
            timestamp: Utc::now(),
        }
    }
}

/// Outcome of one simulated financial transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionResult {
    pub success: bool,
    pub transaction_id: String,
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub path: TransactionPath,
    /// Sampled delay on success, `0` on failure.
    pub processing_time_ms: u64,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl TransactionResult {
    pub fn succeeded(
        transaction_id: String,
        amount: f64,
        transaction_type: TransactionType,
        path: TransactionPath,
        processing_time_ms: u64,
        message: String,
    ) -> Self {
        Self {
            success: true,
            transaction_id,
            amount,
            transaction_type,
            path,
            processing_time_ms,
            message,
            timestamp: Utc::now(),
        }
    }

    pub fn failed(transaction_id: String, amount: f64, message: String) -> Self {
        Self {
            success: false,
            transaction_id,
            amount,
            transaction_type: TransactionType::Unknown,
            path: TransactionPath::Error,
            processing_time_ms: 0,
            message,
            timestamp: Utc::now(),
        }
    }
}
