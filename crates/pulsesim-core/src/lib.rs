//! PulseSim core: domain records, error surface, and randomness primitives.
//!
//! This crate defines the result records returned by the simulators, the
//! error type shared with the server, and the injectable sampler used for
//! every probabilistic decision. It intentionally carries no transport or
//! runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PulseSimError`/`Result` so production
//! processes do not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod ids;
pub mod model;
pub mod sampler;

/// Shared result type.
pub use error::{PulseSimError, Result};
