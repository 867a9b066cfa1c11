//! Simulator services.
//!
//! Both simulators share the same lifecycle: decide parameters, suspend for
//! the sampled delay, sample the transient-failure draw, return an in-band
//! result. Metric side effects fire on every call regardless of outcome.

pub mod operation;
pub mod transaction;

pub use operation::OperationSimulator;
pub use transaction::TransactionSimulator;
