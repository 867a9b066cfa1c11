//! Injectable randomness source.
//!
//! Every probabilistic decision the simulators make (delay width, failure
//! draw, standard-path split) goes through [`Sampler`] so tests can fix
//! outcomes deterministically. Identifier generation deliberately does NOT
//! go through this trait; see [`crate::ids`].

use std::collections::VecDeque;
use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform randomness as the simulators consume it.
pub trait Sampler: Send + Sync {
    /// Uniform draw in `[0, 1)`.
    fn roll(&self) -> f64;

    /// Uniform delay in `[lo_ms, hi_ms)` milliseconds.
    fn delay_between(&self, lo_ms: u64, hi_ms: u64) -> u64;
}

/// Production sampler backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSampler;

impl Sampler for ThreadSampler {
    fn roll(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn delay_between(&self, lo_ms: u64, hi_ms: u64) -> u64 {
        rand::thread_rng().gen_range(lo_ms..hi_ms)
    }
}

/// Seedable sampler for reproducible runs.
///
/// ChaCha8 keeps the stream identical across platforms, so a seeded process
/// replays the same decision sequence every time.
pub struct SeededSampler {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut rng)
    }
}

impl Sampler for SeededSampler {
    fn roll(&self) -> f64 {
        self.with_rng(|rng| rng.gen::<f64>())
    }

    fn delay_between(&self, lo_ms: u64, hi_ms: u64) -> u64 {
        self.with_rng(|rng| rng.gen_range(lo_ms..hi_ms))
    }
}

/// Test-support sampler that replays scripted draws.
///
/// `roll` values and delays are consumed front-to-back from separate queues.
/// When a queue runs dry the fallbacks keep the call on the happy path:
/// `roll` returns `0.99` (above every failure threshold) and `delay_between`
/// returns `lo_ms`.
#[derive(Default)]
pub struct ScriptedSampler {
    rolls: Mutex<VecDeque<f64>>,
    delays: Mutex<VecDeque<u64>>,
}

impl ScriptedSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rolls(self, rolls: impl IntoIterator<Item = f64>) -> Self {
        self.rolls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend(rolls);
        self
    }

    pub fn with_delays(self, delays: impl IntoIterator<Item = u64>) -> Self {
        self.delays
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend(delays);
        self
    }
}

impl Sampler for ScriptedSampler {
    fn roll(&self) -> f64 {
        self.rolls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or(0.99)
    }

    fn delay_between(&self, lo_ms: u64, _hi_ms: u64) -> u64 {
        self.delays
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or(lo_ms)
    }
}
