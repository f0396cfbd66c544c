//! Deterministic source
//!
//! Wraps a provided seeded PRNG primitive (`ChaCha20Rng`) rather than
//! reimplementing one. The output is easily predictable and unsuitable for
//! security-sensitive services.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use super::{Source, DEFAULT_SEED};

/// Deterministic pseudo-random source wrapping a seeded `ChaCha20Rng`
///
/// Constructing without an explicit seed uses the default seed `1`, so two
/// unseeded instances produce identical sequences. Callers that want a
/// varying sequence use [`from_clock`](DeterministicSource::from_clock).
///
/// # Example
///
/// ```
/// use random_sources::{DeterministicSource, Source};
///
/// let a = DeterministicSource::new();
/// let b = DeterministicSource::new();
/// assert_eq!(a.uint64(), b.uint64());
/// ```
#[derive(Debug)]
pub struct DeterministicSource {
    rng: Mutex<ChaCha20Rng>,
}

impl DeterministicSource {
    /// Create a source seeded with the default seed
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Create a source seeded with `seed`
    pub fn with_seed(seed: i64) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed as u64)),
        }
    }

    /// Create a source seeded from the system clock
    ///
    /// The sequence is not reproducible across runs. If the clock reads
    /// before the Unix epoch, the default seed is used instead.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(DEFAULT_SEED as u64);
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(nanos)),
        }
    }
}

impl Default for DeterministicSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for DeterministicSource {
    fn uint64(&self) -> u64 {
        let mut rng = self.rng.lock().expect("deterministic source lock poisoned");
        rng.next_u64()
    }

    /// Delegate to the primitive's 64-bit word, shifted into 63 bits
    fn int63(&self) -> i64 {
        let mut rng = self.rng.lock().expect("deterministic source lock poisoned");
        (rng.next_u64() >> 1) as i64
    }

    /// Replace the entire generator state with one derived from `seed`
    fn seed(&self, seed: i64) {
        let mut rng = self.rng.lock().expect("deterministic source lock poisoned");
        *rng = ChaCha20Rng::seed_from_u64(seed as u64);
    }
}
