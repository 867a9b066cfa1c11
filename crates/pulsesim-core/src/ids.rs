//! Identifier and log-enrichment draws.
//!
//! These come from the process RNG, never from [`crate::sampler::Sampler`]:
//! ids must stay unique even when tests script the sampler, and the
//! synthetic account/amount values only feed structured log fields.

use rand::Rng;

/// Fresh transaction id: 8 uppercase hex chars.
pub fn new_transaction_id() -> String {
    format!("{:08X}", rand::thread_rng().gen::<u32>())
}

/// Fresh operation id: 8 lowercase hex chars.
pub fn new_operation_id() -> String {
    format!("{:08x}", rand::thread_rng().gen::<u32>())
}

/// Synthetic 6-digit account number, log enrichment only.
pub fn synthetic_account_number() -> u32 {
    rand::thread_rng().gen_range(100_000..=999_999)
}

/// Synthetic operation amount in `[100, 5000]`, log enrichment only.
pub fn synthetic_amount() -> u32 {
    rand::thread_rng().gen_range(100..=5000)
}
