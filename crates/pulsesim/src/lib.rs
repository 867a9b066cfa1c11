//! Top-level facade crate for PulseSim.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use pulsesim_core::*;
}

pub mod server {
    pub use pulsesim_server::*;
}
